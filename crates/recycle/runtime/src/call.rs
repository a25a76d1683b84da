//! The call/result contract between a hosting runtime and the contracts.

use recycle_types::{Amount, BlockHeight, ErrorKind, Principal};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One invocation: a method name, its ordered arguments, and the caller the
/// runtime vouches for. The argument list cannot override `sender`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContractCall {
    pub method: String,
    #[serde(default)]
    pub arguments: Vec<Value>,
    pub sender: Principal,
}

impl ContractCall {
    pub fn new(method: impl Into<String>, arguments: Vec<Value>, sender: impl Into<String>) -> Self {
        Self {
            method: method.into(),
            arguments,
            sender: Principal::new(sender),
        }
    }

    pub fn arguments(&self) -> Arguments<'_> {
        Arguments(&self.arguments)
    }
}

/// Outcome of a call, serialized as `{"success": true, "value": ...}` or
/// `{"success": false, "error": ...}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CallResult {
    pub success: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorKind>,
}

impl CallResult {
    pub fn ok() -> Self {
        Self {
            success: true,
            value: None,
            error: None,
        }
    }

    pub fn ok_value(value: Value) -> Self {
        Self {
            success: true,
            value: Some(value),
            error: None,
        }
    }

    pub fn err(kind: ErrorKind) -> Self {
        Self {
            success: false,
            value: None,
            error: Some(kind),
        }
    }

    pub fn is_ok(&self) -> bool {
        self.success
    }
}

impl From<CallOutcome> for CallResult {
    fn from(outcome: CallOutcome) -> Self {
        match outcome {
            Ok(Some(value)) => CallResult::ok_value(value),
            Ok(None) => CallResult::ok(),
            Err(kind) => CallResult::err(kind),
        }
    }
}

/// What a contract returns for a single method invocation.
pub type CallOutcome = Result<Option<Value>, ErrorKind>;

/// Execution context handed to a contract alongside the arguments.
#[derive(Clone, Debug)]
pub struct CallContext {
    pub sender: Principal,
    pub block_height: BlockHeight,
}

/// Positional argument decoder.
///
/// Shape problems (missing or surplus arguments, a principal that is not a
/// string) are `InvalidArguments`. Amounts that are negative, fractional or
/// not decimal are `InvalidAmount`.
#[derive(Clone, Copy, Debug)]
pub struct Arguments<'a>(&'a [Value]);

impl<'a> Arguments<'a> {
    pub fn new(values: &'a [Value]) -> Self {
        Self(values)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fail unless exactly `count` arguments were supplied.
    pub fn expect_len(&self, count: usize) -> Result<(), ErrorKind> {
        if self.0.len() == count {
            Ok(())
        } else {
            Err(ErrorKind::InvalidArguments)
        }
    }

    pub fn principal(&self, index: usize) -> Result<Principal, ErrorKind> {
        match self.0.get(index) {
            Some(Value::String(id)) => Ok(Principal::new(id.as_str())),
            _ => Err(ErrorKind::InvalidArguments),
        }
    }

    pub fn amount(&self, index: usize) -> Result<Amount, ErrorKind> {
        match self.0.get(index) {
            Some(Value::Number(n)) => n.as_u64().ok_or(ErrorKind::InvalidAmount),
            Some(Value::String(s)) => parse_amount(s),
            Some(_) | None => Err(ErrorKind::InvalidArguments),
        }
    }
}

fn parse_amount(s: &str) -> Result<Amount, ErrorKind> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::InvalidAmount);
    }
    s.parse::<Amount>().map_err(|_| ErrorKind::InvalidAmount)
}
