#[cfg(test)]
pub mod helpers {
    use crate::api::transport::{ApiRequest, ApiResponse};
    use crate::api::Transport;
    use crate::config::ConfigStore;
    use crate::constants::CONFIG_FILENAME;
    use crate::error::BarkError;
    use std::cell::RefCell;
    use std::fs;
    use std::path::Path;

    pub fn create_file(base: &Path, path: &str, content: &str) {
        let full_path = base.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }

    pub fn assert_file_exists(base: &Path, path: &str) {
        assert!(base.join(path).exists(), "Expected {path} to exist");
    }

    pub fn assert_file_not_exists(base: &Path, path: &str) {
        assert!(!base.join(path).exists(), "Expected {path} to not exist");
    }

    pub fn store_in(dir: &Path) -> ConfigStore {
        ConfigStore::new(dir.join(CONFIG_FILENAME))
    }

    /// Records every request and answers with a canned result.
    pub struct MockTransport {
        outcome: Result<ApiResponse, String>,
        requests: RefCell<Vec<ApiRequest>>,
    }

    impl MockTransport {
        pub fn responding(status: u16, body: &str) -> Self {
            Self::with_response(ApiResponse {
                status,
                body: body.to_string(),
            })
        }

        pub fn with_response(response: ApiResponse) -> Self {
            Self {
                outcome: Ok(response),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                outcome: Err(message.to_string()),
                requests: RefCell::new(Vec::new()),
            }
        }

        pub fn requests(&self) -> Vec<ApiRequest> {
            self.requests.borrow().clone()
        }
    }

    impl Transport for MockTransport {
        fn get(&self, request: &ApiRequest) -> Result<ApiResponse, BarkError> {
            self.requests.borrow_mut().push(request.clone());
            self.outcome.clone().map_err(BarkError::Network)
        }
    }
}
