pub mod request;
pub mod response;

pub use request::SubmitAnswersRequest;
pub use response::SubmissionResponse;
