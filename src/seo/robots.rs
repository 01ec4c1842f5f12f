use std::fmt;

const DISALLOWED: [&str; 5] = ["/api/", "/admin/", "/_next/", "/private/", "/studio/"];

#[derive(Debug, Clone, PartialEq)]
pub struct RobotsPolicy {
    pub user_agent: String,
    pub allow: Vec<String>,
    pub disallow: Vec<String>,
    pub sitemap: String,
}

impl RobotsPolicy {
    pub fn for_site(base_url: &str) -> RobotsPolicy {
        RobotsPolicy {
            user_agent: "*".to_string(),
            allow: vec!["/".to_string()],
            disallow: DISALLOWED.iter().map(|path| path.to_string()).collect(),
            sitemap: format!("{}/sitemap.xml", base_url.trim_end_matches('/')),
        }
    }
}

impl fmt::Display for RobotsPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "User-agent: {}", self.user_agent)?;
        for path in &self.allow {
            writeln!(f, "Allow: {}", path)?;
        }
        for path in &self.disallow {
            writeln!(f, "Disallow: {}", path)?;
        }
        writeln!(f)?;
        writeln!(f, "Sitemap: {}", self.sitemap)
    }
}
