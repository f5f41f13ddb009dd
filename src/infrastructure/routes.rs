//! Web routes opened from the list.

/// URL of a DAO's root page: `{base_url}/dao/{address}`.
///
/// # Examples
///
/// ```
/// use daospaces::infrastructure::dao_root;
///
/// assert_eq!(dao_root("https://app.example/", "EQAbc"), "https://app.example/dao/EQAbc");
/// ```
#[must_use]
pub fn dao_root(base_url: &str, address: &str) -> String {
    format!("{}/dao/{}", base_url.trim_end_matches('/'), address)
}
