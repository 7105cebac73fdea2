//! Key predicates compiled from directives
//!
//! Prefix boundary rule: `url` covers itself, anything under `url/`, and any
//! query variant `url?...`. A trailing `/` is added only if missing, so
//! `projects` covers `projects/new/` but never `projects_archive/`.

use regex::Regex;

use super::directive::Directive;

/// Boolean predicate over raw cache keys
#[derive(Debug, Clone)]
pub enum Matcher {
    Never,
    Always,
    Exact(String),
    Prefix {
        resource: String,
        /// `resource` with exactly one trailing separator
        children: String,
        /// `resource` followed by a query separator
        variants: String,
    },
    Pattern(Regex),
}

impl Matcher {
    pub fn exact(key: &str) -> Self {
        Self::Exact(key.to_string())
    }

    pub fn prefix(resource: &str) -> Self {
        let children = if resource.ends_with('/') {
            resource.to_string()
        } else {
            format!("{resource}/")
        };
        Self::Prefix {
            resource: resource.to_string(),
            children,
            variants: format!("{resource}?"),
        }
    }

    pub fn matches(&self, key: &str) -> bool {
        match self {
            Self::Never => false,
            Self::Always => true,
            Self::Exact(target) => key == target,
            Self::Prefix {
                resource,
                children,
                variants,
            } => {
                key == resource
                    || key.starts_with(children.as_str())
                    || key.starts_with(variants.as_str())
            }
            Self::Pattern(re) => re.is_match(key),
        }
    }
}

impl From<&Directive> for Matcher {
    fn from(directive: &Directive) -> Self {
        match directive {
            Directive::None => Self::Never,
            Directive::All => Self::Always,
            Directive::Exact(key) => Self::exact(key.as_str()),
            Directive::Prefix(key) => Self::prefix(key.as_str()),
            Directive::Pattern(re) => Self::Pattern(re.clone()),
        }
    }
}
