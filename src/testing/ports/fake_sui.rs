use std::collections::HashMap;
use std::path::Path;
use std::sync::Mutex;

use crate::domain::AppError;
use crate::ports::{CallRequest, SuiPort};

/// Fake `sui` CLI serving canned JSON responses and logging invocations.
pub struct FakeSui {
    pub invocations: Mutex<Vec<String>>,
    publish_responses: Mutex<HashMap<String, String>>,
    call_responses: Mutex<HashMap<String, String>>,
    object_response: Mutex<String>,
    balance_response: Mutex<String>,
    address: Mutex<String>,
    fail_publish: Mutex<Option<String>>,
}

impl Default for FakeSui {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl FakeSui {
    pub fn new() -> Self {
        Self {
            invocations: Mutex::new(Vec::new()),
            publish_responses: Mutex::new(HashMap::new()),
            call_responses: Mutex::new(HashMap::new()),
            object_response: Mutex::new("{}".to_string()),
            balance_response: Mutex::new(r#"{"totalBalance":"0"}"#.to_string()),
            address: Mutex::new("0xADDR".to_string()),
            fail_publish: Mutex::new(None),
        }
    }

    /// Canned response for publishing the package named `name`.
    pub fn set_publish_response(&self, name: &str, raw: &str) {
        self.publish_responses.lock().unwrap().insert(name.to_string(), raw.to_string());
    }

    /// Canned response for a `call` into the given module.
    pub fn set_call_response(&self, module: &str, raw: &str) {
        self.call_responses.lock().unwrap().insert(module.to_string(), raw.to_string());
    }

    pub fn set_object_response(&self, raw: &str) {
        *self.object_response.lock().unwrap() = raw.to_string();
    }

    pub fn set_balance_response(&self, raw: &str) {
        *self.balance_response.lock().unwrap() = raw.to_string();
    }

    /// Make publishing the named package fail.
    pub fn fail_publish_of(&self, name: &str) {
        *self.fail_publish.lock().unwrap() = Some(name.to_string());
    }

    pub fn log(&self) -> Vec<String> {
        self.invocations.lock().unwrap().clone()
    }

    fn record(&self, entry: String) {
        self.invocations.lock().unwrap().push(entry);
    }

    fn package_name(package_dir: &Path) -> String {
        package_dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

impl SuiPort for FakeSui {
    fn move_build(&self, package_dir: &Path) -> Result<(), AppError> {
        self.record(format!("move build {}", Self::package_name(package_dir)));
        Ok(())
    }

    fn publish(&self, package_dir: &Path, gas_budget: u64) -> Result<String, AppError> {
        let name = Self::package_name(package_dir);
        self.record(format!("publish {name} --gas-budget {gas_budget}"));

        if self.fail_publish.lock().unwrap().as_deref() == Some(name.as_str()) {
            return Err(AppError::Sui {
                command: format!("sui client publish ({name})"),
                details: "simulated publish failure".to_string(),
            });
        }

        Ok(self
            .publish_responses
            .lock()
            .unwrap()
            .get(&name)
            .cloned()
            .unwrap_or_else(|| "{}".to_string()))
    }

    fn call(&self, request: &CallRequest) -> Result<String, AppError> {
        self.record(format!(
            "call {}::{}::{} type-args [{}] args [{}]",
            request.package,
            request.module,
            request.function,
            request.type_args.join(","),
            request.args.join(",")
        ));
        Ok(self
            .call_responses
            .lock()
            .unwrap()
            .get(&request.module)
            .cloned()
            .unwrap_or_else(|| "{}".to_string()))
    }

    fn active_address(&self) -> Result<String, AppError> {
        self.record("active-address".to_string());
        Ok(self.address.lock().unwrap().clone())
    }

    fn object(&self, object_id: &str) -> Result<String, AppError> {
        self.record(format!("object {object_id}"));
        Ok(self.object_response.lock().unwrap().clone())
    }

    fn balance(&self, address: &str, coin_type: &str) -> Result<String, AppError> {
        self.record(format!("balance {address} {coin_type}"));
        Ok(self.balance_response.lock().unwrap().clone())
    }
}
