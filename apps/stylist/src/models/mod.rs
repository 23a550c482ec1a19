pub mod fashion;
pub mod quiz;

pub use fashion::{BodyType, StyleLabel};
pub use quiz::{QuizAnswers, QUIZ_QUESTIONS};
