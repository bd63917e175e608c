pub mod health;
pub mod matches;
pub mod seeding;
pub mod teams;
