pub mod submit_inquiry_service;

pub use submit_inquiry_service::SubmitInquiryService;
