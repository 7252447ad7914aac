use std::error::Error;

pub type AnyError = Box<dyn Error>;

pub type AnyResult<T> = Result<T, AnyError>;
