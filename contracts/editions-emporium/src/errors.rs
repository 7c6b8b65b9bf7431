use near_sdk_macros::NearSchema;

#[derive(NearSchema, near_sdk::FunctionError)]
#[abi(json)]
#[derive(Debug, Clone, serde::Serialize)]
pub enum EmporiumError {
    Unauthorized(String),
    InvalidInput(String),
    NotPurchasable(String),
    NotTransferable(String),
    SupplyLimitExceeded(String),
    BalanceLimitExceeded(String),
    DuplicateId(String),
    InvalidPayment(String),
    InvalidLimit(String),
    InsufficientBalance(String),
    ContractPaused(String),
    InternalError(String),
}

impl std::fmt::Display for EmporiumError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unauthorized(msg) => write!(f, "Unauthorized: {}", msg),
            Self::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            Self::NotPurchasable(msg) => write!(f, "Not purchasable: {}", msg),
            Self::NotTransferable(msg) => write!(f, "Not transferable: {}", msg),
            Self::SupplyLimitExceeded(msg) => write!(f, "Supply limit exceeded: {}", msg),
            Self::BalanceLimitExceeded(msg) => write!(f, "Balance limit exceeded: {}", msg),
            Self::DuplicateId(msg) => write!(f, "Duplicate id: {}", msg),
            Self::InvalidPayment(msg) => write!(f, "Invalid payment: {}", msg),
            Self::InvalidLimit(msg) => write!(f, "Invalid limit: {}", msg),
            Self::InsufficientBalance(msg) => write!(f, "Insufficient balance: {}", msg),
            Self::ContractPaused(msg) => write!(f, "Contract paused: {}", msg),
            Self::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl EmporiumError {
    pub fn not_purchasable(token_id: &str) -> Self {
        Self::NotPurchasable(format!("Token {} is not open for purchase", token_id))
    }
    pub fn not_transferable(token_id: &str) -> Self {
        Self::NotTransferable(format!("Token {} is not transferable", token_id))
    }
    pub fn duplicate_id(token_id: &str) -> Self {
        Self::DuplicateId(format!("Token {} appears more than once in batch", token_id))
    }
    pub fn only_owner(what: &str) -> Self {
        Self::Unauthorized(format!("Only {} can perform this action", what))
    }
    pub fn paused() -> Self {
        Self::ContractPaused("Contract is paused".into())
    }
}
