pub mod quiz;
pub mod quiz_question;
pub mod quiz_result;
pub mod submission;
pub mod user;
pub use quiz::Quiz;
pub use quiz_question::{Answer, Question};
pub use quiz_result::{QuizResult, ResultAnswer};
pub use submission::{AnswerChoice, SubmissionError, SubmissionOutcome};
pub use user::User;
