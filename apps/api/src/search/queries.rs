//! Builds the web-search query list from a resume analysis.

use crate::models::Analysis;

pub const QUERY_TYPE_GENERAL_ROLE: &str = "general_role";
pub const QUERY_TYPE_TARGETED_COMPANY_ROLE: &str = "targeted_company_role";

#[derive(Debug, Clone, PartialEq)]
pub struct SearchQuery {
    pub query: String,
    pub query_type: &'static str,
}

/// One general query per suggested role, then one targeted query per
/// company x role pair. Order matters: it decides the first-seen group
/// order when clients render the results.
pub fn build_queries(analysis: &Analysis) -> Vec<SearchQuery> {
    let roles = analysis.suggested_roles.as_deref().unwrap_or_default();
    let companies = analysis.suggested_companies.as_deref().unwrap_or_default();

    let mut queries = Vec::with_capacity(roles.len() + companies.len() * roles.len());

    for role in roles {
        queries.push(SearchQuery {
            query: format!("\"{role}\" job openings"),
            query_type: QUERY_TYPE_GENERAL_ROLE,
        });
    }

    for company in companies {
        for role in roles {
            queries.push(SearchQuery {
                query: format!("\"{role}\" job at \"{company}\""),
                query_type: QUERY_TYPE_TARGETED_COMPANY_ROLE,
            });
        }
    }

    queries
}
