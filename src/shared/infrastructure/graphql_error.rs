use async_graphql::{Error, ErrorExtensions};

use crate::shared::application::errors::ApplicationError;

impl ErrorExtensions for ApplicationError {
    fn extend(&self) -> Error {
        let message = match self {
            Self::Store(_) | Self::Unexpected(_) => {
                tracing::error!(error = %self, "graphql request failed");
                "internal server error".to_string()
            }
            _ => self.to_string(),
        };
        let code = self.code().to_string();
        Error::new(message).extend_with(|_, extensions| extensions.set("code", code.clone()))
    }
}
