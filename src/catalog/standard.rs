//! The site's published price list.

use super::{Demo, Feature, FixedFeature, OptionEntry, OptionFeature, Price};

fn fixed(id: &str, name: &str, price: Price, description: &str) -> FixedFeature {
    FixedFeature {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        price,
        required: false,
        highlights: Vec::new(),
        demo: None,
    }
}

fn options(
    id: &str,
    name: &str,
    description: &str,
    entries: &[(&str, &str, Price)],
) -> OptionFeature {
    OptionFeature {
        id: id.into(),
        name: name.into(),
        description: description.into(),
        options: entries
            .iter()
            .map(|(id, label, price)| OptionEntry {
                id: (*id).into(),
                label: (*label).into(),
                price: *price,
            })
            .collect(),
        default_option_id: entries.first().map(|(id, _, _)| (*id).to_string()),
        highlights: Vec::new(),
        demo: None,
    }
}

fn highlights(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

pub(super) fn features() -> Vec<Feature> {
    let landing = FixedFeature {
        required: true,
        ..fixed(
            "landing",
            "Landing Page",
            1500,
            "Single scrolling page, up to 5 sections",
        )
    };

    let animations = FixedFeature {
        highlights: highlights(&[
            "Scene-based storytelling with GSAP",
            "Micro-interactions for conversion cues",
            "Performance budgets baked in",
        ]),
        ..fixed(
            "animations",
            "Advanced Animations",
            400,
            "Custom cursor, scroll effects, GSAP integration",
        )
    };

    let audio = FixedFeature {
        highlights: highlights(&[
            "Modular player components with playlists",
            "Mini-player handoff + stateful resume",
            "Analytics ready (completion, skips, volume)",
        ]),
        demo: Some(Demo::Audio),
        ..fixed(
            "audio-systems",
            "Audio / Media Systems",
            450,
            "Custom audio player with playlists, analytics hooks, and mini-player integration",
        )
    };

    vec![
        Feature::Fixed(landing),
        Feature::Fixed(animations),
        Feature::Fixed(fixed(
            "contact-form",
            "Contact Form",
            150,
            "Spam protection, email notifications",
        )),
        Feature::Fixed(audio),
        Feature::Options(options(
            "multipage",
            "Multi-Page Website",
            "Pick the size of the experience",
            &[
                ("multi-3-5", "3-5 pages", 2000),
                ("multi-6-10", "6-10 pages", 3500),
                ("multi-11-15", "11-15 pages", 5000),
            ],
        )),
        Feature::Options(options(
            "ecommerce",
            "E-commerce Store",
            "Choose catalog size",
            &[
                ("commerce-0-50", "Up to 50 products", 3000),
                ("commerce-51-200", "51-200 products", 5000),
                ("commerce-201-500", "201-500 products", 8000),
            ],
        )),
        Feature::Options(options(
            "database",
            "Backend & Database",
            "Data model & API complexity",
            &[
                ("db-simple", "Simple (1-2 tables)", 2000),
                ("db-medium", "Medium (3-5 tables, basic API)", 3500),
                ("db-complex", "Complex (6+ tables, full API)", 6000),
            ],
        )),
        Feature::Options(options(
            "cms",
            "Content Management",
            "Decide how your team edits content",
            &[
                ("cms-basic", "Basic editor (text/images)", 800),
                ("cms-full", "Full CMS (Strapi/Payload)", 2000),
            ],
        )),
    ]
}
