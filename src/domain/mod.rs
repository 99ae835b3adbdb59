// ドメイン層 - 力モデルと構成の中核

pub mod configuration;
pub mod force;
