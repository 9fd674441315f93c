use std::fmt;

/// Represents the CRM sales pipeline a lead is routed into
///
/// Each marketing site submits a short pipeline key with the form payload;
/// the key selects which pipeline the deal is created in.
///
/// # Key Mapping
/// ```text
/// "lds" -> Strategy  (pipeline id 2)
/// "ldm" -> Marketing (pipeline id 1)
/// "ldp" -> Partners  (pipeline id 3)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// Long Drive Strategy site
    Strategy,
    /// Long Drive Marketing site
    Marketing,
    /// Long Drive Partners site
    Partners,
}

impl Pipeline {
    /// Resolves a submitted pipeline key
    ///
    /// Unknown keys resolve to `Strategy`, matching the CRM default used
    /// when a site misconfigures its form.
    ///
    /// # Example
    /// ```
    /// use leadrelay_api::domain::lead::value_objects::Pipeline;
    ///
    /// assert_eq!(Pipeline::from_key("ldp"), Pipeline::Partners);
    /// assert_eq!(Pipeline::from_key("bogus"), Pipeline::Strategy);
    /// ```
    pub fn from_key(key: &str) -> Self {
        match key {
            "ldm" => Pipeline::Marketing,
            "ldp" => Pipeline::Partners,
            _ => Pipeline::Strategy,
        }
    }

    /// Returns the numeric pipeline id assigned by the CRM
    pub fn id(&self) -> i64 {
        match self {
            Pipeline::Marketing => 1,
            Pipeline::Strategy => 2,
            Pipeline::Partners => 3,
        }
    }
}

impl fmt::Display for Pipeline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pipeline::Strategy => write!(f, "lds"),
            Pipeline::Marketing => write!(f, "ldm"),
            Pipeline::Partners => write!(f, "ldp"),
        }
    }
}
