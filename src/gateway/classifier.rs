//! Caller classification from request headers.

/// `User-Agent` substrings of known non-interactive HTTP tools.
pub const DATA_CLIENT_AGENTS: [&str; 2] = ["curl", "wget"];

/// What the caller expects back.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClientKind {
    /// Non-interactive caller expecting raw JSON.
    Data,
    /// Browser expecting rendered pages.
    Ui,
}

/// Classifies a request from its `Accept` and `User-Agent` headers.
///
/// A caller is a data client when `Accept` names a JSON media type or the
/// `User-Agent` carries a known tool signature; everything else is a UI
/// client.
pub fn classify(accept: Option<&str>, user_agent: Option<&str>) -> ClientKind {
    if accept.is_some_and(accepts_json) {
        return ClientKind::Data;
    }

    if user_agent.is_some_and(|agent| {
        let agent = agent.to_ascii_lowercase();
        DATA_CLIENT_AGENTS
            .iter()
            .any(|signature| agent.contains(signature))
    }) {
        return ClientKind::Data;
    }

    ClientKind::Ui
}

/// True when any media range in the `Accept` header is a JSON type,
/// either `application/json` itself or a `+json` structured suffix.
fn accepts_json(accept: &str) -> bool {
    accept.split(',').any(|range| {
        let media_type = range
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        media_type == "application/json" || media_type.ends_with("+json")
    })
}
