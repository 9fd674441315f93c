// HTTP handlers (controller adapters)

pub mod leads;
