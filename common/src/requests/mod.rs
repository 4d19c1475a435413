/// Joins the configured API base and an endpoint path with exactly one `/`.
///
/// An empty base keeps the path relative to the page origin.
pub fn endpoint_url(api_base: &str, path: &str) -> String {
    let base = api_base.trim_end_matches('/');
    let path = path.trim_start_matches('/');
    format!("{}/{}", base, path)
}
