/// Tenant domain used when the host did not resolve one.
pub const DEFAULT_TENANT_DOMAIN: &str = "carbon.super";

/// Numeric tenant ID of [`DEFAULT_TENANT_DOMAIN`].
pub const DEFAULT_TENANT_ID: i32 = -1234;
