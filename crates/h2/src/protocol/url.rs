use http::Uri;
use http::uri::Port;

/// A component of an already parsed URI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UrlComponent {
    Scheme,
    Authority,
    Host,
    Port,
    Path,
    Query,
    PathAndQuery,
}

/// Appends `component` of `uri` to `dest`.
///
/// URI parsing itself is delegated to [`http::Uri`]; this only copies the pieces a
/// caller needs to synthesize pseudo-headers (`:scheme`, `:authority`, `:path`).
/// If `uri` has no such component, `dest` is left untouched.
pub fn copy_url_component(dest: &mut String, uri: &Uri, component: UrlComponent) {
    let port = uri.port();
    let value = match component {
        UrlComponent::Scheme => uri.scheme_str(),
        UrlComponent::Authority => uri.authority().map(|authority| authority.as_str()),
        UrlComponent::Host => uri.host(),
        UrlComponent::Port => port.as_ref().map(Port::as_str),
        UrlComponent::Path => Some(uri.path()).filter(|path| !path.is_empty()),
        UrlComponent::Query => uri.query(),
        UrlComponent::PathAndQuery => uri.path_and_query().map(|pq| pq.as_str()),
    };

    if let Some(value) = value {
        dest.push_str(value);
    }
}
