//! Static copy for the landing page, embedded at build time and parsed once
//! at start-up. Nothing here is mutated after loading.

use std::rc::Rc;

use serde::Deserialize;
use thiserror::Error;

const SITE_JSON: &str = include_str!("../content/site.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("site content is malformed: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Feature {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ServiceDetails {
    #[serde(default)]
    pub use_cases: Vec<String>,
    #[serde(default)]
    pub implementation_steps: Vec<String>,
    #[serde(default)]
    pub roi_points: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServiceOffering {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub image: Option<String>,
    pub benefits: Vec<String>,
    pub features: Vec<Feature>,
    #[serde(default)]
    pub details: Option<ServiceDetails>,
}

impl ServiceOffering {
    // The detail sections render empty when the bundle is absent.

    pub fn use_cases(&self) -> &[String] {
        self.details
            .as_ref()
            .map(|d| d.use_cases.as_slice())
            .unwrap_or_default()
    }

    pub fn implementation_steps(&self) -> &[String] {
        self.details
            .as_ref()
            .map(|d| d.implementation_steps.as_slice())
            .unwrap_or_default()
    }

    pub fn roi_points(&self) -> &[String] {
        self.details
            .as_ref()
            .map(|d| d.roi_points.as_slice())
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub description: String,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Testimonial {
    pub quote: String,
    pub author: String,
    pub position: String,
    pub image: Option<String>,
    pub rating: u8,
    pub metric: String,
}

impl Testimonial {
    /// One star glyph per rating point.
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub headline: String,
    pub highlight: String,
    pub tagline: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    pub expertise: Vec<Feature>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CallToAction {
    pub headline: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SiteContent {
    pub brand: String,
    pub logo: Option<String>,
    pub hero: Hero,
    pub stats: Vec<Stat>,
    pub highlights: Vec<Highlight>,
    pub about: About,
    pub services: Vec<Rc<ServiceOffering>>,
    pub testimonials: Vec<Testimonial>,
    pub call_to_action: CallToAction,
    pub faqs: Vec<FaqEntry>,
    pub toast_message: String,
}

impl SiteContent {
    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(SITE_JSON)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn embedded_content_parses() {
        let content = SiteContent::embedded().unwrap();
        assert_eq!(content.brand, "Nova Automations");
        assert_eq!(content.services.len(), 4);
        assert_eq!(content.faqs.len(), 5);
        assert_eq!(content.testimonials.len(), 3);
        assert_eq!(content.stats.len(), 4);
    }

    #[test]
    fn every_shipped_service_has_details() {
        let content = SiteContent::embedded().unwrap();
        for service in &content.services {
            assert!(!service.use_cases().is_empty(), "{}", service.title);
            assert!(!service.implementation_steps().is_empty(), "{}", service.title);
            assert!(!service.roi_points().is_empty(), "{}", service.title);
        }
    }

    #[test]
    fn missing_details_read_as_empty() {
        let raw = r#"{
            "title": "Bare",
            "subtitle": "No extras",
            "description": "Only the basics",
            "image": null,
            "benefits": ["one"],
            "features": []
        }"#;
        let service: ServiceOffering = serde_json::from_str(raw).unwrap();
        assert_eq!(service.details, None);
        assert!(service.use_cases().is_empty());
        assert!(service.implementation_steps().is_empty());
        assert!(service.roi_points().is_empty());
    }

    #[test]
    fn testimonial_stars_follow_the_rating() {
        let content = SiteContent::embedded().unwrap();
        for testimonial in &content.testimonials {
            assert_eq!(
                testimonial.stars().chars().count(),
                usize::from(testimonial.rating)
            );
        }
        let unrated = Testimonial {
            rating: 0,
            ..content.testimonials[0].clone()
        };
        assert_eq!(unrated.stars(), "");
    }

    #[test]
    fn malformed_payload_is_an_error() {
        let err = SiteContent::from_json("{\"brand\": 3}").unwrap_err();
        assert!(matches!(err, ContentError::Parse(_)));
    }
}
