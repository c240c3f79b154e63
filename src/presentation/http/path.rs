// src/presentation/http/path.rs
//! Path template handling. Documentation templates use `{name}`; the router
//! expects `:name`.

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Rewrite every `{name}` placeholder to `:name`. Anything else, including
/// existing `:name` segments and malformed braces, is copied as is.
pub fn to_router_path(template: &str) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let after = &rest[start + 1..];
        match after.find('}') {
            Some(end) if is_placeholder_name(&after[..end]) => {
                out.push(':');
                out.push_str(&after[..end]);
                rest = &after[end + 1..];
            }
            _ => {
                out.push('{');
                rest = after;
            }
        }
    }

    out.push_str(rest);
    out
}

/// Names of the `:name` and `*name` segments of a router path, in order.
pub fn placeholder_names(router_path: &str) -> Vec<&str> {
    router_path
        .split('/')
        .filter_map(|segment| segment.strip_prefix([':', '*']))
        .filter(|name| !name.is_empty())
        .collect()
}

/// Router path with every placeholder name erased. Two paths with the same
/// shape occupy the same route in the router.
pub fn route_shape(router_path: &str) -> String {
    router_path
        .split('/')
        .map(|segment| match segment.chars().next() {
            Some(marker @ (':' | '*')) => marker.to_string(),
            _ => segment.to_string(),
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Check that the router will accept `router_path`; returns the reason
/// when it would not.
pub fn validate_router_path(router_path: &str) -> Result<(), String> {
    let Some(rest) = router_path.strip_prefix('/') else {
        return Err("path must start with '/'".into());
    };

    let segments: Vec<&str> = rest.split('/').collect();
    let mut names = Vec::new();
    for (index, segment) in segments.iter().enumerate() {
        let Some(marker) = segment.find([':', '*']) else {
            continue;
        };
        if marker != 0 {
            return Err(format!("placeholder in `{segment}` must span the whole segment"));
        }
        let name = &segment[1..];
        if !is_placeholder_name(name) {
            return Err(format!("invalid placeholder `{segment}`"));
        }
        if segment.starts_with('*') && index + 1 != segments.len() {
            return Err(format!("wildcard `{segment}` must be the last segment"));
        }
        if names.contains(&name) {
            return Err(format!("placeholder `{name}` appears more than once"));
        }
        names.push(name);
    }
    Ok(())
}
