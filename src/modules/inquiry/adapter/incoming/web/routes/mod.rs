mod submit_inquiry;

pub use submit_inquiry::{__path_submit_inquiry_handler, submit_inquiry_handler, ContactInquiryRequest, InquiryAccepted};
