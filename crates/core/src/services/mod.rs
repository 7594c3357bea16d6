pub mod guarantee_service;
pub mod valuation_service;
