//! URL building utilities for API endpoints

/// Builds the GraphQL endpoint URL for one operation.
///
/// A domain without a scheme is treated as `https://`.
///
/// # Example
/// ```
/// use court_slots::booking::api::build_graphql_url;
///
/// let url = build_graphql_url("https://booking.example.com", "schedule");
/// assert_eq!(url, "https://booking.example.com/graphql?opName=schedule");
/// ```
pub fn build_graphql_url(api_domain: &str, operation: &str) -> String {
    let domain = api_domain.trim().trim_end_matches('/');
    if domain.starts_with("http://") || domain.starts_with("https://") {
        format!("{domain}/graphql?opName={operation}")
    } else {
        format!("https://{domain}/graphql?opName={operation}")
    }
}
