use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacebookCopy {
    pub headlines: Vec<String>,
    pub primary_texts: Vec<String>,
    pub ctas: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GoogleCopy {
    pub headlines: Vec<String>,
    pub descriptions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EmailCopy {
    pub subjects: Vec<String>,
    pub preheaders: Vec<String>,
    pub bodies: Vec<String>,
}

/// Ad and email copy extracted from one generation response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CopyResult {
    pub facebook: FacebookCopy,
    pub google: GoogleCopy,
    pub email: EmailCopy,
}

impl CopyResult {
    pub fn is_empty(&self) -> bool {
        self.fragments().next().is_none()
    }

    /// Every generated fragment, in display order.
    pub fn fragments(&self) -> impl Iterator<Item = &str> {
        [
            &self.facebook.headlines,
            &self.facebook.primary_texts,
            &self.facebook.ctas,
            &self.google.headlines,
            &self.google.descriptions,
            &self.email.subjects,
            &self.email.preheaders,
            &self.email.bodies,
        ]
        .into_iter()
        .flatten()
        .map(String::as_str)
    }
}
