use std::{env, sync::LazyLock};

/// bcrypt work factor used by [`hash_password`](super::hash_password)
pub static BCRYPT_COST: LazyLock<u32> =
    LazyLock::new(|| parse_bcrypt_cost(env::var("BCRYPT_COST").ok().as_deref()));

/// Accept only costs bcrypt supports, falling back to its default otherwise
pub(super) fn parse_bcrypt_cost(value: Option<&str>) -> u32 {
    match value.map(str::trim).map(str::parse::<u32>) {
        Some(Ok(cost)) if (4..=31).contains(&cost) => cost,
        Some(_) => {
            tracing::warn!("Ignoring invalid BCRYPT_COST, using default");
            bcrypt::DEFAULT_COST
        }
        None => bcrypt::DEFAULT_COST,
    }
}
