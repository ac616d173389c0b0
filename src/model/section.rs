//! Section kinds, their design variants, and strongly typed props

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

use super::fields::{record, FieldError, FieldValue, Record};
use super::items::{
    item, BlogPost, FaqEntry, FeatureItem, GalleryImage, ItemCollection, LogoEntry, NavLink,
    PricingPlan, Quote, StatEntry, TeamMember, TimelineEntry,
};

/// Returned when a section kind name is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown section kind: {0}")]
pub struct UnknownKind(pub String);

/// Every kind of section a page can contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Nav,
    Hero,
    FeatureGrid,
    Content,
    Video,
    Steps,
    Timeline,
    Gallery,
    Blog,
    LogoCloud,
    Stats,
    Team,
    Testimonial,
    Pricing,
    Faq,
    Banner,
    Cta,
    Newsletter,
    Contact,
    Footer,
}

/// A named alternate layout for a section kind
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VariantDescriptor {
    pub id: &'static str,
    pub label: &'static str,
}

const fn variant(id: &'static str, label: &'static str) -> VariantDescriptor {
    VariantDescriptor { id, label }
}

const HERO_VARIANTS: &[VariantDescriptor] = &[
    variant("centered", "Centered (Default)"),
    variant("split", "Split Left/Right"),
    variant("glow", "Glow Effect"),
];
const FEATURE_GRID_VARIANTS: &[VariantDescriptor] = &[
    variant("grid", "Simple Grid"),
    variant("cards", "Cards with Border"),
    variant("list", "List View"),
];
const STATS_VARIANTS: &[VariantDescriptor] = &[
    variant("simple", "Simple Text"),
    variant("cards", "Boxed Cards"),
    variant("split", "Split Background"),
];
const TESTIMONIAL_VARIANTS: &[VariantDescriptor] = &[
    variant("grid", "Grid Cards"),
    variant("minimal", "Minimal (No Bg)"),
    variant("centered", "Large Centered"),
];
const CTA_VARIANTS: &[VariantDescriptor] = &[
    variant("centered", "Centered Box"),
    variant("split", "Split Text/Button"),
    variant("minimal", "Minimal Link"),
];
const CONTACT_VARIANTS: &[VariantDescriptor] = &[
    variant("centered", "Centered Form"),
    variant("split", "Split Info/Form"),
];
const TEAM_VARIANTS: &[VariantDescriptor] = &[
    variant("grid", "Grid Cards"),
    variant("list", "Horizontal List"),
];
const VIDEO_VARIANTS: &[VariantDescriptor] = &[
    variant("browser", "Browser Frame"),
    variant("plain", "Rounded Plain"),
    variant("full", "Full Width"),
];
const CONTENT_VARIANTS: &[VariantDescriptor] = &[
    variant("centered", "Centered Prose"),
    variant("split-img", "Text + Image"),
];
const BANNER_VARIANTS: &[VariantDescriptor] = &[
    variant("top", "Slim Strip"),
    variant("box", "Info Box"),
];

impl SectionKind {
    /// All kinds in sidebar order
    pub const ALL: [SectionKind; 20] = [
        SectionKind::Nav,
        SectionKind::Hero,
        SectionKind::FeatureGrid,
        SectionKind::Content,
        SectionKind::Video,
        SectionKind::Steps,
        SectionKind::Timeline,
        SectionKind::Gallery,
        SectionKind::Blog,
        SectionKind::LogoCloud,
        SectionKind::Stats,
        SectionKind::Team,
        SectionKind::Testimonial,
        SectionKind::Pricing,
        SectionKind::Faq,
        SectionKind::Banner,
        SectionKind::Cta,
        SectionKind::Newsletter,
        SectionKind::Contact,
        SectionKind::Footer,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SectionKind::Nav => "nav",
            SectionKind::Hero => "hero",
            SectionKind::FeatureGrid => "feature-grid",
            SectionKind::Content => "content",
            SectionKind::Video => "video",
            SectionKind::Steps => "steps",
            SectionKind::Timeline => "timeline",
            SectionKind::Gallery => "gallery",
            SectionKind::Blog => "blog",
            SectionKind::LogoCloud => "logo-cloud",
            SectionKind::Stats => "stats",
            SectionKind::Team => "team",
            SectionKind::Testimonial => "testimonial",
            SectionKind::Pricing => "pricing",
            SectionKind::Faq => "faq",
            SectionKind::Banner => "banner",
            SectionKind::Cta => "cta",
            SectionKind::Newsletter => "newsletter",
            SectionKind::Contact => "contact",
            SectionKind::Footer => "footer",
        }
    }

    /// Human readable label
    pub fn label(self) -> &'static str {
        match self {
            SectionKind::Nav => "Navigation",
            SectionKind::Hero => "Hero Section",
            SectionKind::FeatureGrid => "Features",
            SectionKind::Content => "Content / Article",
            SectionKind::Video => "Video Embed",
            SectionKind::Steps => "How it Works",
            SectionKind::Timeline => "Timeline",
            SectionKind::Gallery => "Gallery",
            SectionKind::Blog => "Blog Grid",
            SectionKind::LogoCloud => "Logo Cloud",
            SectionKind::Stats => "Stats",
            SectionKind::Team => "Team",
            SectionKind::Testimonial => "Testimonials",
            SectionKind::Pricing => "Pricing",
            SectionKind::Faq => "FAQ",
            SectionKind::Banner => "Promo Banner",
            SectionKind::Cta => "Call to Action",
            SectionKind::Newsletter => "Newsletter",
            SectionKind::Contact => "Contact Form",
            SectionKind::Footer => "Footer",
        }
    }

    /// Registered variants, first one being the default
    pub fn variants(self) -> &'static [VariantDescriptor] {
        match self {
            SectionKind::Hero => HERO_VARIANTS,
            SectionKind::FeatureGrid => FEATURE_GRID_VARIANTS,
            SectionKind::Stats => STATS_VARIANTS,
            SectionKind::Testimonial => TESTIMONIAL_VARIANTS,
            SectionKind::Cta => CTA_VARIANTS,
            SectionKind::Contact => CONTACT_VARIANTS,
            SectionKind::Team => TEAM_VARIANTS,
            SectionKind::Video => VIDEO_VARIANTS,
            SectionKind::Content => CONTENT_VARIANTS,
            SectionKind::Banner => BANNER_VARIANTS,
            _ => &[],
        }
    }

    pub fn default_variant(self) -> Option<&'static str> {
        self.variants().first().map(|v| v.id)
    }

    pub fn has_variant(self, id: &str) -> bool {
        self.variants().iter().any(|v| v.id == id)
    }

    /// Name of the nested item list, if the kind has one
    pub fn list_field(self) -> Option<&'static str> {
        match self {
            SectionKind::Nav => Some("links"),
            SectionKind::Hero
            | SectionKind::Cta
            | SectionKind::Footer
            | SectionKind::Contact
            | SectionKind::Newsletter
            | SectionKind::Video
            | SectionKind::Content
            | SectionKind::Banner => None,
            _ => Some("items"),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for SectionKind {
    type Err = UnknownKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SectionKind::ALL
            .into_iter()
            .find(|k| k.name() == s)
            .ok_or_else(|| UnknownKind(s.to_string()))
    }
}

record! {
    pub struct NavProps {
        pub title: String,
        pub links: Vec<NavLink>,
    }
}

record! {
    pub struct HeroProps {
        pub title: String,
        pub subtitle: String,
        pub primary_btn: String,
        pub secondary_btn: String,
    }
}

record! {
    /// Shared by the feature grid and the steps section
    pub struct FeatureListProps {
        pub title: String,
        pub description: String,
        pub items: Vec<FeatureItem>,
    }
}

record! {
    pub struct TimelineProps {
        pub title: String,
        pub description: String,
        pub items: Vec<TimelineEntry>,
    }
}

record! {
    pub struct GalleryProps {
        pub title: String,
        pub description: String,
        pub items: Vec<GalleryImage>,
    }
}

record! {
    pub struct BlogProps {
        pub title: String,
        pub description: String,
        pub items: Vec<BlogPost>,
    }
}

record! {
    pub struct CtaProps {
        pub title: String,
        pub button_text: String,
    }
}

record! {
    pub struct FooterProps {
        pub text: String,
    }
}

record! {
    pub struct TestimonialProps {
        pub title: String,
        pub items: Vec<Quote>,
    }
}

record! {
    pub struct PricingProps {
        pub title: String,
        pub description: String,
        pub items: Vec<PricingPlan>,
    }
}

record! {
    pub struct FaqProps {
        pub title: String,
        pub items: Vec<FaqEntry>,
    }
}

record! {
    pub struct LogoCloudProps {
        pub title: String,
        pub items: Vec<LogoEntry>,
    }
}

record! {
    /// Title and description only; used by contact, video
    pub struct HeadingProps {
        pub title: String,
        pub description: String,
    }
}

record! {
    pub struct TeamProps {
        pub title: String,
        pub description: String,
        pub items: Vec<TeamMember>,
    }
}

record! {
    pub struct StatsProps {
        pub items: Vec<StatEntry>,
    }
}

record! {
    pub struct NewsletterProps {
        pub title: String,
        pub description: String,
        pub button_text: String,
    }
}

record! {
    pub struct ContentProps {
        pub title: String,
        pub content: String,
    }
}

record! {
    pub struct BannerProps {
        pub text: String,
        pub link_text: String,
    }
}

/// Props of one section, tagged by kind
#[derive(Debug, Clone, PartialEq)]
pub enum SectionProps {
    Nav(NavProps),
    Hero(HeroProps),
    FeatureGrid(FeatureListProps),
    Content(ContentProps),
    Video(HeadingProps),
    Steps(FeatureListProps),
    Timeline(TimelineProps),
    Gallery(GalleryProps),
    Blog(BlogProps),
    LogoCloud(LogoCloudProps),
    Stats(StatsProps),
    Team(TeamProps),
    Testimonial(TestimonialProps),
    Pricing(PricingProps),
    Faq(FaqProps),
    Banner(BannerProps),
    Cta(CtaProps),
    Newsletter(NewsletterProps),
    Contact(HeadingProps),
    Footer(FooterProps),
}

/// Run `$body` with `$p` bound to the inner props struct
macro_rules! with_props {
    ($self:expr, $p:ident => $body:expr) => {
        match $self {
            SectionProps::Nav($p) => $body,
            SectionProps::Hero($p) => $body,
            SectionProps::FeatureGrid($p) | SectionProps::Steps($p) => $body,
            SectionProps::Content($p) => $body,
            SectionProps::Video($p) | SectionProps::Contact($p) => $body,
            SectionProps::Timeline($p) => $body,
            SectionProps::Gallery($p) => $body,
            SectionProps::Blog($p) => $body,
            SectionProps::LogoCloud($p) => $body,
            SectionProps::Stats($p) => $body,
            SectionProps::Team($p) => $body,
            SectionProps::Testimonial($p) => $body,
            SectionProps::Pricing($p) => $body,
            SectionProps::Faq($p) => $body,
            SectionProps::Banner($p) => $body,
            SectionProps::Cta($p) => $body,
            SectionProps::Newsletter($p) => $body,
            SectionProps::Footer($p) => $body,
        }
    };
}

fn fields_of<R: Record>(_: &R) -> &'static [&'static str] {
    R::FIELDS
}

fn text(value: &str) -> FieldValue {
    FieldValue::text(value)
}

fn features(list: &[&str]) -> FieldValue {
    FieldValue::List(list.iter().map(|s| s.to_string()).collect())
}

impl SectionProps {
    pub fn kind(&self) -> SectionKind {
        match self {
            SectionProps::Nav(_) => SectionKind::Nav,
            SectionProps::Hero(_) => SectionKind::Hero,
            SectionProps::FeatureGrid(_) => SectionKind::FeatureGrid,
            SectionProps::Content(_) => SectionKind::Content,
            SectionProps::Video(_) => SectionKind::Video,
            SectionProps::Steps(_) => SectionKind::Steps,
            SectionProps::Timeline(_) => SectionKind::Timeline,
            SectionProps::Gallery(_) => SectionKind::Gallery,
            SectionProps::Blog(_) => SectionKind::Blog,
            SectionProps::LogoCloud(_) => SectionKind::LogoCloud,
            SectionProps::Stats(_) => SectionKind::Stats,
            SectionProps::Team(_) => SectionKind::Team,
            SectionProps::Testimonial(_) => SectionKind::Testimonial,
            SectionProps::Pricing(_) => SectionKind::Pricing,
            SectionProps::Faq(_) => SectionKind::Faq,
            SectionProps::Banner(_) => SectionKind::Banner,
            SectionProps::Cta(_) => SectionKind::Cta,
            SectionProps::Newsletter(_) => SectionKind::Newsletter,
            SectionProps::Contact(_) => SectionKind::Contact,
            SectionProps::Footer(_) => SectionKind::Footer,
        }
    }

    /// Field names of this kind's props, in declaration order
    pub fn field_names(&self) -> &'static [&'static str] {
        with_props!(self, p => fields_of(p))
    }

    pub fn field(&self, name: &str) -> Option<FieldValue> {
        with_props!(self, p => p.field(name))
    }

    /// Set one field by name; false if unknown or mistyped
    pub fn set_field(&mut self, name: &str, value: FieldValue) -> bool {
        with_props!(self, p => p.set_field(name, value))
    }

    /// Apply named overrides; each field replaces the existing one wholesale
    pub fn apply_fields(&mut self, fields: &[(String, FieldValue)]) -> Result<(), FieldError> {
        with_props!(self, p => p.apply_fields(fields))
    }

    /// Title text shown for the section, when the kind has one
    pub fn title(&self) -> Option<String> {
        self.field("title").and_then(|v| v.as_text().map(str::to_string))
    }

    /// The nested `items`/`links` list
    pub fn items(&self) -> Option<&dyn ItemCollection> {
        match self {
            SectionProps::Nav(p) => Some(&p.links),
            SectionProps::FeatureGrid(p) | SectionProps::Steps(p) => Some(&p.items),
            SectionProps::Timeline(p) => Some(&p.items),
            SectionProps::Gallery(p) => Some(&p.items),
            SectionProps::Blog(p) => Some(&p.items),
            SectionProps::LogoCloud(p) => Some(&p.items),
            SectionProps::Stats(p) => Some(&p.items),
            SectionProps::Team(p) => Some(&p.items),
            SectionProps::Testimonial(p) => Some(&p.items),
            SectionProps::Pricing(p) => Some(&p.items),
            SectionProps::Faq(p) => Some(&p.items),
            _ => None,
        }
    }

    pub fn items_mut(&mut self) -> Option<&mut dyn ItemCollection> {
        match self {
            SectionProps::Nav(p) => Some(&mut p.links),
            SectionProps::FeatureGrid(p) | SectionProps::Steps(p) => Some(&mut p.items),
            SectionProps::Timeline(p) => Some(&mut p.items),
            SectionProps::Gallery(p) => Some(&mut p.items),
            SectionProps::Blog(p) => Some(&mut p.items),
            SectionProps::LogoCloud(p) => Some(&mut p.items),
            SectionProps::Stats(p) => Some(&mut p.items),
            SectionProps::Team(p) => Some(&mut p.items),
            SectionProps::Testimonial(p) => Some(&mut p.items),
            SectionProps::Pricing(p) => Some(&mut p.items),
            SectionProps::Faq(p) => Some(&mut p.items),
            _ => None,
        }
    }

    /// Default props for `kind`; every item gets a fresh id
    pub fn defaults(kind: SectionKind) -> SectionProps {
        match kind {
            SectionKind::Nav => SectionProps::Nav(NavProps {
                title: "Brand".into(),
                links: ["Features", "Pricing", "About"]
                    .into_iter()
                    .map(|t| item(&[("text", text(t)), ("href", text("#"))]))
                    .collect(),
            }),
            SectionKind::Hero => SectionProps::Hero(HeroProps {
                title: "Build faster with components.".into(),
                subtitle: "Beautifully designed components that you can copy and paste into your apps.".into(),
                primary_btn: "Get Started".into(),
                secondary_btn: "GitHub".into(),
            }),
            SectionKind::FeatureGrid => SectionProps::FeatureGrid(FeatureListProps {
                title: "Features".into(),
                description: "Everything you need to build your SaaS.".into(),
                items: titled(&[
                    ("Feature 1", "Optimized for performance and built for scale."),
                    ("Feature 2", "Handles your needs perfectly with modern architecture."),
                    ("Feature 3", "Secure by default and easy to configure."),
                ]),
            }),
            SectionKind::Steps => SectionProps::Steps(FeatureListProps {
                title: "How it works".into(),
                description: "Simple steps to get started.".into(),
                items: titled(&[
                    ("Sign Up", "Create your free account in seconds."),
                    ("Customize", "Choose your settings and preferences."),
                    ("Launch", "Publish your site to the world."),
                ]),
            }),
            SectionKind::Timeline => SectionProps::Timeline(TimelineProps {
                title: "Our Journey".into(),
                description: "See how far we have come.".into(),
                items: [
                    ("2024", "Global Expansion", "Opened offices in 3 new continents."),
                    ("2023", "Series B Funding", "Raised $50M to scale operations."),
                    ("2022", "Product Launch", "First version released to the public."),
                ]
                .into_iter()
                .map(|(year, title, description)| {
                    item(&[
                        ("year", text(year)),
                        ("title", text(title)),
                        ("description", text(description)),
                    ])
                })
                .collect(),
            }),
            SectionKind::Gallery => SectionProps::Gallery(GalleryProps {
                title: "Our Work".into(),
                description: "A glimpse into our recent projects.".into(),
                items: (1..=6)
                    .map(|n| item(&[("alt", text(&format!("Project {n}")))]))
                    .collect(),
            }),
            SectionKind::Blog => SectionProps::Blog(BlogProps {
                title: "From the blog".into(),
                description: "Latest news and updates from our team.".into(),
                items: [
                    ("The Future of Web Dev", "Mar 16, 2024", "Exploring new technologies and trends."),
                    ("Mastering React", "Mar 14, 2024", "Tips and tricks for better components."),
                    ("Design Systems 101", "Mar 12, 2024", "How to build consistent UIs."),
                ]
                .into_iter()
                .map(|(title, date, description)| {
                    item(&[
                        ("title", text(title)),
                        ("date", text(date)),
                        ("description", text(description)),
                    ])
                })
                .collect(),
            }),
            SectionKind::Cta => SectionProps::Cta(CtaProps {
                title: "Ready to get started?".into(),
                button_text: "Start Building".into(),
            }),
            SectionKind::Footer => SectionProps::Footer(FooterProps {
                text: "\u{a9} 2024 Acme Inc. All rights reserved.".into(),
            }),
            SectionKind::Testimonial => SectionProps::Testimonial(TestimonialProps {
                title: "Loved by thousands".into(),
                items: [
                    ("This library has saved me countless hours.", "Sofia Davis", "CTO at TechCorp"),
                    ("The code quality is top-notch.", "Alex Chen", "Lead Dev"),
                    ("I can't imagine building without it.", "James Wilson", "Product Manager"),
                ]
                .into_iter()
                .map(|(quote, author, role)| {
                    item(&[
                        ("quote", text(quote)),
                        ("author", text(author)),
                        ("role", text(role)),
                    ])
                })
                .collect(),
            }),
            SectionKind::Pricing => SectionProps::Pricing(PricingProps {
                title: "Simple Pricing".into(),
                description: "Choose the plan that's right for you".into(),
                items: vec![
                    item(&[
                        ("name", text("Starter")),
                        ("price", text("0")),
                        ("popular", FieldValue::Flag(false)),
                        ("features", features(&["Project Management", "Basic Analytics", "Email Support"])),
                    ]),
                    item(&[
                        ("name", text("Pro")),
                        ("price", text("29")),
                        ("popular", FieldValue::Flag(true)),
                        ("features", features(&["Unlimited Projects", "Advanced Analytics", "24/7 Support"])),
                    ]),
                    item(&[
                        ("name", text("Enterprise")),
                        ("price", text("99")),
                        ("popular", FieldValue::Flag(false)),
                        ("features", features(&["Custom Solutions", "Dedicated Manager", "SLA"])),
                    ]),
                ],
            }),
            SectionKind::Faq => SectionProps::Faq(FaqProps {
                title: "Frequently Asked Questions".into(),
                items: [
                    ("Is it compatible with Next.js?", "Yes, it is built specifically for the Next.js ecosystem."),
                    ("Can I use it for commercial projects?", "Absolutely! It's fully open source."),
                    ("Do you offer support?", "Community support is available via Discord."),
                ]
                .into_iter()
                .map(|(question, answer)| {
                    item(&[("question", text(question)), ("answer", text(answer))])
                })
                .collect(),
            }),
            SectionKind::LogoCloud => SectionProps::LogoCloud(LogoCloudProps {
                title: "Trusted by industry leaders".into(),
                items: (1..=5)
                    .map(|n| item(&[("name", text(&format!("Company {n}")))]))
                    .collect(),
            }),
            SectionKind::Contact => SectionProps::Contact(HeadingProps {
                title: "Get in touch".into(),
                description: "We'd love to hear from you.".into(),
            }),
            SectionKind::Team => SectionProps::Team(TeamProps {
                title: "Meet our team".into(),
                description: "The best team in the world.".into(),
                items: [
                    ("Alice Johnson", "CEO"),
                    ("Bob Smith", "CTO"),
                    ("Carol Williams", "Designer"),
                ]
                .into_iter()
                .map(|(name, role)| item(&[("name", text(name)), ("role", text(role))]))
                .collect(),
            }),
            SectionKind::Stats => SectionProps::Stats(StatsProps {
                items: [("Downloads", "10K+"), ("Users", "50K+"), ("Countries", "20+")]
                    .into_iter()
                    .map(|(label, value)| item(&[("label", text(label)), ("value", text(value))]))
                    .collect(),
            }),
            SectionKind::Newsletter => SectionProps::Newsletter(NewsletterProps {
                title: "Subscribe to our newsletter".into(),
                description: "Get the latest news and updates.".into(),
                button_text: "Subscribe".into(),
            }),
            SectionKind::Video => SectionProps::Video(HeadingProps {
                title: "Watch Demo".into(),
                description: "See how it works in action.".into(),
            }),
            SectionKind::Content => SectionProps::Content(ContentProps {
                title: "About the Project".into(),
                content: "Lorem ipsum dolor sit amet, consectetur adipiscing elit. Sed do eiusmod tempor incididunt ut labore et dolore magna aliqua. Ut enim ad minim veniam, quis nostrud exercitation ullamco laboris nisi ut aliquip ex ea commodo consequat.".into(),
            }),
            SectionKind::Banner => SectionProps::Banner(BannerProps {
                text: "Big news! We are launching our new version soon.".into(),
                link_text: "Learn more".into(),
            }),
        }
    }
}

fn titled(rows: &[(&str, &str)]) -> Vec<FeatureItem> {
    rows.iter()
        .map(|(title, description)| {
            item(&[("title", text(title)), ("description", text(description))])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_kind() {
        for kind in SectionKind::ALL {
            let props = SectionProps::defaults(kind);
            assert_eq!(props.kind(), kind);
            assert_eq!(props.items().is_some(), kind.list_field().is_some(), "{kind}");
            if let Some(list) = kind.list_field() {
                assert!(props.field_names().contains(&list), "{kind} lacks {list}");
                assert!(props.items().map_or(0, |i| i.item_count()) > 0);
            }
        }
    }

    #[test]
    fn test_defaults_mint_fresh_item_ids() {
        let a = SectionProps::defaults(SectionKind::Faq);
        let b = SectionProps::defaults(SectionKind::Faq);
        let ids_a = a.items().map(|i| i.item_ids()).unwrap_or_default();
        let ids_b = b.items().map(|i| i.item_ids()).unwrap_or_default();
        assert_eq!(ids_a.len(), 3);
        assert!(ids_a.iter().all(|id| !ids_b.contains(id)));
    }

    #[test]
    fn test_kind_names_round_trip() {
        for kind in SectionKind::ALL {
            assert_eq!(kind.name().parse::<SectionKind>(), Ok(kind));
        }
        assert!("carousel".parse::<SectionKind>().is_err());
    }

    #[test]
    fn test_variant_registry() {
        assert_eq!(SectionKind::Hero.default_variant(), Some("centered"));
        assert!(SectionKind::Video.has_variant("full"));
        assert!(!SectionKind::Hero.has_variant("full"));
        assert_eq!(SectionKind::Nav.default_variant(), None);
    }

    #[test]
    fn test_set_field_by_name() {
        let mut props = SectionProps::defaults(SectionKind::Hero);
        assert!(props.set_field("primary_btn", FieldValue::text("Try it")));
        assert_eq!(props.field("primary_btn"), Some(FieldValue::text("Try it")));
        assert!(!props.set_field("items", FieldValue::text("nope")));
        assert!(!props.set_field("colour", FieldValue::text("red")));
    }

    #[test]
    fn test_apply_fields_replaces_item_list_wholesale() {
        let mut props = SectionProps::defaults(SectionKind::Team);
        let rows = vec![vec![("name".to_string(), FieldValue::text("Dana"))]];
        props
            .apply_fields(&[("items".to_string(), FieldValue::Records(rows))])
            .expect("items accepts rows");
        let items = props.items().expect("team has items");
        assert_eq!(items.item_count(), 1);
        assert_eq!(items.item_label(0), Some("Dana".to_string()));
        assert_eq!(props.title(), Some("Meet our team".to_string()));
    }
}
