pub mod form_session;
pub mod publisher;

#[cfg(test)]
#[path = "form_session_test.rs"]
mod form_session_test;

#[cfg(test)]
#[path = "publisher_test.rs"]
mod publisher_test;
