use astra::Response;

use crate::errors::ServerError;

pub type ResultResp = Result<Response, ServerError>;
