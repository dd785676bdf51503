use std::io::Read;

use isahc::{
    http::{Request, Response},
    HttpClient,
};

pub type TransportError = Box<dyn std::error::Error + Send + Sync>;

/// Executes a fully built HTTP request and hands back the buffered response.
pub trait Transport {
    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, TransportError>;
}

impl Transport for HttpClient {
    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, TransportError> {
        let response = self.send(request)?;
        let (parts, mut body) = response.into_parts();

        let mut buffer = Vec::new();
        body.read_to_end(&mut buffer)?;

        Ok(Response::from_parts(parts, buffer))
    }
}

impl<T: Transport + ?Sized> Transport for &T {
    fn execute(&self, request: Request<Vec<u8>>) -> Result<Response<Vec<u8>>, TransportError> {
        (**self).execute(request)
    }
}
