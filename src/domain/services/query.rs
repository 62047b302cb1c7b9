/// Builder for the inline search-query syntax of the recent-search endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<String>,
    exclude_retweets: bool,
    lang: Option<String>,
}

impl SearchQuery {
    pub fn any_of<I, S>(terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            terms: terms.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    pub fn exclude_retweets(mut self) -> Self {
        self.exclude_retweets = true;
        self
    }

    pub fn lang(mut self, lang: &str) -> Self {
        self.lang = Some(lang.to_string());
        self
    }

    pub fn build(&self) -> String {
        let mut parts = vec![self.terms.join(" OR ")];
        if self.exclude_retweets {
            parts.push("-is:retweet".to_string());
        }
        if let Some(lang) = &self.lang {
            parts.push(format!("lang:{}", lang));
        }
        parts.retain(|p| !p.is_empty());
        parts.join(" ")
    }
}

/// The weather and climate query used when none is configured.
pub fn default_query() -> String {
    SearchQuery::any_of(["weather", "climate", "storm", "flood", "rainfall"])
        .exclude_retweets()
        .lang("en")
        .build()
}
