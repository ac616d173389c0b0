//! Section markup catalog
//!
//! Maps a section kind and variant to its markup. Preview and export both go
//! through [`render`], so they cannot drift apart.

use crate::model::section::{
    BannerProps, BlogProps, ContentProps, CtaProps, FaqProps, FeatureListProps, FooterProps,
    GalleryProps, HeadingProps, HeroProps, LogoCloudProps, NavProps, NewsletterProps,
    PricingProps, StatsProps, TeamProps, TestimonialProps, TimelineProps,
};
use crate::model::{SectionKind, SectionProps};

use super::classes::SectionClasses;
use super::markup::{el, Element};

const CONTAINER: &str = "container mx-auto";
const MEDIA: &str = "rounded-[var(--radius)] bg-muted";

/// Variant defaults, the lowest class layer of a section
pub fn base_classes(kind: SectionKind, variant: Option<&str>) -> &'static str {
    match (kind, variant) {
        (SectionKind::Nav, _) => "w-full border-b bg-background py-4",
        (SectionKind::Footer, _) => "w-full border-t py-8",
        (SectionKind::Banner, Some("box")) => "w-full py-4",
        (SectionKind::Banner, _) => "w-full bg-primary text-primary-foreground py-2 text-center text-sm",
        (SectionKind::Hero, Some("glow")) => "relative w-full overflow-hidden text-center",
        (SectionKind::Hero, Some("split")) => "w-full",
        (SectionKind::Hero, _) => "w-full text-center",
        (SectionKind::Cta, Some("split")) => "w-full bg-muted/50",
        (SectionKind::Cta, _) => "w-full text-center",
        (SectionKind::Stats, Some("split")) => "w-full bg-muted/50",
        (SectionKind::Testimonial, Some("centered")) => "w-full text-center",
        (SectionKind::LogoCloud, _) => "w-full border-y",
        (SectionKind::Newsletter, _) => "w-full text-center",
        _ => "w-full",
    }
}

/// Markup for one section. `variant` must already be resolved.
pub fn render(props: &SectionProps, variant: Option<&str>, classes: &SectionClasses) -> Element {
    let v = variant.unwrap_or_default();
    match props {
        SectionProps::Nav(p) => nav(p, classes),
        SectionProps::Hero(p) => hero(p, v, classes),
        SectionProps::FeatureGrid(p) => features(p, v, classes),
        SectionProps::Steps(p) => steps(p, classes),
        SectionProps::Timeline(p) => timeline(p, classes),
        SectionProps::Gallery(p) => gallery(p, classes),
        SectionProps::Blog(p) => blog(p, classes),
        SectionProps::LogoCloud(p) => logo_cloud(p, classes),
        SectionProps::Stats(p) => stats(p, v, classes),
        SectionProps::Team(p) => team(p, v, classes),
        SectionProps::Testimonial(p) => testimonials(p, v, classes),
        SectionProps::Pricing(p) => pricing(p, classes),
        SectionProps::Faq(p) => faq(p, classes),
        SectionProps::Banner(p) => banner(p, v, classes),
        SectionProps::Cta(p) => cta(p, v, classes),
        SectionProps::Newsletter(p) => newsletter(p, classes),
        SectionProps::Contact(p) => contact(p, v, classes),
        SectionProps::Video(p) => video(p, v, classes),
        SectionProps::Content(p) => content(p, v, classes),
        SectionProps::Footer(p) => footer(p, classes),
    }
}

fn section(classes: &SectionClasses) -> Element {
    el("section").class(classes.section.clone())
}

/// `base` followed by `extra`, without a dangling separator
fn with_extra(base: &str, extra: &str) -> String {
    let extra = extra.trim();
    if extra.is_empty() {
        base.to_string()
    } else {
        format!("{base} {extra}")
    }
}

fn container(extra: &str) -> Element {
    el("div").class(with_extra(CONTAINER, extra))
}

fn card(classes: &SectionClasses, extra: &str) -> Element {
    el("div").class(with_extra(&classes.card, extra))
}

fn heading(title: &str) -> Element {
    el("h2")
        .class("text-3xl font-bold tracking-tighter sm:text-4xl")
        .text(title)
}

fn lead(text: &str) -> Element {
    el("p").class("mt-4 text-muted-foreground md:text-lg").text(text)
}

fn header_block(title: &str, description: &str) -> Element {
    el("div")
        .class("mx-auto mb-12 max-w-2xl text-center")
        .child(heading(title))
        .child(lead(description))
}

fn button(label: &str, primary: bool) -> Element {
    let tone = if primary {
        "bg-primary text-primary-foreground hover:bg-primary/90"
    } else {
        "border bg-background hover:bg-accent hover:text-accent-foreground"
    };
    el("a")
        .attr("href", "#")
        .class(format!(
            "inline-flex h-10 items-center justify-center rounded-[var(--radius)] px-6 text-sm font-medium transition-colors {tone}"
        ))
        .text(label)
}

fn item_title(title: &str) -> Element {
    el("h3").class("text-xl font-semibold").text(title)
}

fn muted(text: &str) -> Element {
    el("p").class("text-muted-foreground").text(text)
}

fn nav(p: &NavProps, classes: &SectionClasses) -> Element {
    el("header").class(classes.section.clone()).child(
        container("flex h-14 items-center justify-between")
            .child(el("a").attr("href", "#").class("text-lg font-bold").text(&p.title))
            .child(el("nav").class("flex items-center gap-6 text-sm").children(
                p.links.iter().map(|link| {
                    el("a")
                        .attr("href", link.href.clone())
                        .class("text-muted-foreground transition-colors hover:text-foreground")
                        .text(&link.text)
                }),
            )),
    )
}

fn hero_copy(p: &HeroProps, align: &str) -> Element {
    el("div")
        .class(with_extra("flex flex-col gap-6", align))
        .child(
            el("h1")
                .class("text-4xl font-bold tracking-tighter sm:text-5xl md:text-6xl")
                .text(&p.title),
        )
        .child(
            el("p")
                .class("max-w-[700px] text-muted-foreground md:text-xl")
                .text(&p.subtitle),
        )
        .child(
            el("div")
                .class("flex flex-wrap gap-4")
                .child(button(&p.primary_btn, true))
                .child(button(&p.secondary_btn, false)),
        )
}

fn hero(p: &HeroProps, variant: &str, classes: &SectionClasses) -> Element {
    match variant {
        "split" => section(classes).child(
            container("grid items-center gap-12 md:grid-cols-2")
                .child(hero_copy(p, "items-start"))
                .child(el("div").class(format!("aspect-video {MEDIA}"))),
        ),
        "glow" => section(classes)
            .child(
                el("div")
                    .attr("aria-hidden", "true")
                    .class("absolute inset-0 -z-10 bg-gradient-to-b from-primary/20 to-background blur-3xl"),
            )
            .child(container("").child(hero_copy(p, "items-center"))),
        _ => section(classes).child(container("").child(hero_copy(p, "items-center"))),
    }
}

fn features(p: &FeatureListProps, variant: &str, classes: &SectionClasses) -> Element {
    let body = match variant {
        "cards" => el("div").class("grid gap-6 md:grid-cols-3").children(p.items.iter().map(|item| {
            card(classes, "p-6")
                .child(item_title(&item.title))
                .child(el("p").class("mt-2 text-muted-foreground").text(&item.description))
        })),
        "list" => el("div")
            .class("mx-auto flex max-w-3xl flex-col gap-8")
            .children(p.items.iter().map(|item| {
                el("div")
                    .class("flex gap-4")
                    .child(el("div").class("h-10 w-10 shrink-0 rounded-full bg-primary/10"))
                    .child(
                        el("div")
                            .child(item_title(&item.title))
                            .child(muted(&item.description)),
                    )
            })),
        _ => el("div").class("grid gap-8 md:grid-cols-3").children(p.items.iter().map(|item| {
            el("div")
                .class("flex flex-col gap-2")
                .child(item_title(&item.title))
                .child(muted(&item.description))
        })),
    };
    section(classes).child(
        container("")
            .child(header_block(&p.title, &p.description))
            .child(body),
    )
}

fn steps(p: &FeatureListProps, classes: &SectionClasses) -> Element {
    section(classes).child(
        container("")
            .child(header_block(&p.title, &p.description))
            .child(el("div").class("grid gap-8 md:grid-cols-3").children(
                p.items.iter().enumerate().map(|(i, item)| {
                    el("div")
                        .class("flex flex-col items-center gap-2 text-center")
                        .child(
                            el("span")
                                .class("flex h-10 w-10 items-center justify-center rounded-full bg-primary font-bold text-primary-foreground")
                                .text((i + 1).to_string()),
                        )
                        .child(item_title(&item.title))
                        .child(muted(&item.description))
                }),
            )),
    )
}

fn timeline(p: &TimelineProps, classes: &SectionClasses) -> Element {
    section(classes).child(
        container("max-w-3xl")
            .child(header_block(&p.title, &p.description))
            .child(el("ol").class("relative ml-4 border-l").children(p.items.iter().map(|entry| {
                el("li")
                    .class("mb-10 ml-6")
                    .child(el("time").class("text-sm font-semibold text-primary").text(&entry.year))
                    .child(item_title(&entry.title))
                    .child(muted(&entry.description))
            }))),
    )
}

fn gallery(p: &GalleryProps, classes: &SectionClasses) -> Element {
    section(classes).child(
        container("")
            .child(header_block(&p.title, &p.description))
            .child(el("div").class("grid grid-cols-2 gap-4 md:grid-cols-3").children(
                p.items.iter().map(|image| {
                    el("div")
                        .attr("role", "img")
                        .attr("aria-label", image.alt.clone())
                        .class(format!(
                            "flex aspect-square items-center justify-center text-sm text-muted-foreground {MEDIA}"
                        ))
                        .text(&image.alt)
                }),
            )),
    )
}

fn blog(p: &BlogProps, classes: &SectionClasses) -> Element {
    section(classes).child(
        container("")
            .child(header_block(&p.title, &p.description))
            .child(el("div").class("grid gap-8 md:grid-cols-3").children(p.items.iter().map(|post| {
                el("article")
                    .class(format!("{} overflow-hidden", classes.card))
                    .child(el("div").class("aspect-video bg-muted"))
                    .child(
                        el("div")
                            .class("flex flex-col gap-2 p-6")
                            .child(el("time").class("text-sm text-muted-foreground").text(&post.date))
                            .child(item_title(&post.title))
                            .child(muted(&post.description)),
                    )
            }))),
    )
}

fn logo_cloud(p: &LogoCloudProps, classes: &SectionClasses) -> Element {
    section(classes).child(
        container("")
            .child(
                el("p")
                    .class("text-center text-sm font-semibold uppercase tracking-wider text-muted-foreground")
                    .text(&p.title),
            )
            .child(
                el("div")
                    .class("mt-8 flex flex-wrap items-center justify-center gap-8 md:gap-12")
                    .children(p.items.iter().map(|logo| {
                        el("span")
                            .class("text-xl font-bold text-muted-foreground/60")
                            .text(&logo.name)
                    })),
            ),
    )
}

fn stat(value: &str, label: &str, extra: &str) -> Element {
    el("div")
        .class(with_extra("flex flex-col gap-1", extra))
        .child(el("p").class("text-4xl font-bold").text(value))
        .child(el("p").class("text-muted-foreground").text(label))
}

fn stats(p: &StatsProps, variant: &str, classes: &SectionClasses) -> Element {
    let grid = match variant {
        "cards" => el("div").class("grid gap-6 sm:grid-cols-3").children(p.items.iter().map(|s| {
            card(classes, "p-6 text-center").child(stat(&s.value, &s.label, "items-center"))
        })),
        "split" => el("div")
            .class("grid divide-y rounded-[var(--radius)] border bg-background sm:grid-cols-3 sm:divide-x sm:divide-y-0")
            .children(p.items.iter().map(|s| stat(&s.value, &s.label, "p-8"))),
        _ => el("div")
            .class("grid gap-8 text-center sm:grid-cols-3")
            .children(p.items.iter().map(|s| stat(&s.value, &s.label, "items-center"))),
    };
    section(classes).child(container("").child(grid))
}

fn team(p: &TeamProps, variant: &str, classes: &SectionClasses) -> Element {
    let members = match variant {
        "list" => el("div").class("flex flex-wrap justify-center gap-8").children(p.items.iter().map(|m| {
            el("div")
                .class("flex items-center gap-4")
                .child(el("div").class("h-12 w-12 rounded-full bg-muted"))
                .child(
                    el("div")
                        .child(el("p").class("font-semibold").text(&m.name))
                        .child(el("p").class("text-sm text-muted-foreground").text(&m.role)),
                )
        })),
        _ => el("div").class("grid gap-8 sm:grid-cols-2 md:grid-cols-3").children(p.items.iter().map(|m| {
            card(classes, "p-6 text-center")
                .child(el("div").class("mx-auto mb-4 h-24 w-24 rounded-full bg-muted"))
                .child(item_title(&m.name))
                .child(el("p").class("text-sm text-muted-foreground").text(&m.role))
        })),
    };
    section(classes).child(
        container("")
            .child(header_block(&p.title, &p.description))
            .child(members),
    )
}

fn testimonials(p: &TestimonialProps, variant: &str, classes: &SectionClasses) -> Element {
    let quotes = match variant {
        "minimal" => el("div").class("grid gap-12 md:grid-cols-3").children(p.items.iter().map(|q| {
            el("figure")
                .class("flex flex-col gap-4 border-l-2 pl-6")
                .child(el("blockquote").class("text-lg").text(format!("\u{201c}{}\u{201d}", q.quote)))
                .child(
                    el("figcaption")
                        .class("text-sm text-muted-foreground")
                        .text(format!("{}, {}", q.author, q.role)),
                )
        })),
        "centered" => el("div").class("mx-auto flex max-w-3xl flex-col gap-12").children(p.items.iter().map(|q| {
            el("figure")
                .class("flex flex-col gap-4")
                .child(
                    el("blockquote")
                        .class("text-2xl font-medium md:text-3xl")
                        .text(format!("\u{201c}{}\u{201d}", q.quote)),
                )
                .child(
                    el("figcaption")
                        .child(el("p").class("font-semibold").text(&q.author))
                        .child(el("p").class("text-sm text-muted-foreground").text(&q.role)),
                )
        })),
        _ => el("div").class("grid gap-6 md:grid-cols-3").children(p.items.iter().map(|q| {
            card(classes, "flex flex-col justify-between gap-6 p-6")
                .child(el("blockquote").class("text-lg").text(format!("\u{201c}{}\u{201d}", q.quote)))
                .child(
                    el("div")
                        .child(el("p").class("font-semibold").text(&q.author))
                        .child(el("p").class("text-sm text-muted-foreground").text(&q.role)),
                )
        })),
    };
    section(classes).child(
        container("")
            .child(el("div").class("mb-12 text-center").child(heading(&p.title)))
            .child(quotes),
    )
}

fn pricing(p: &PricingProps, classes: &SectionClasses) -> Element {
    section(classes).child(
        container("")
            .child(header_block(&p.title, &p.description))
            .child(el("div").class("grid gap-8 md:grid-cols-3").children(p.items.iter().map(|plan| {
                let emphasis = if plan.popular { "border-primary ring-2 ring-primary" } else { "" };
                let mut tier = card(classes, &format!("relative flex flex-col gap-6 p-6 {emphasis}"));
                if plan.popular {
                    tier = tier.child(
                        el("span")
                            .class("absolute -top-3 left-1/2 -translate-x-1/2 rounded-full bg-primary px-3 py-1 text-xs font-medium text-primary-foreground")
                            .text("Most Popular"),
                    );
                }
                tier.child(item_title(&plan.name))
                    .child(
                        el("p")
                            .child(el("span").class("text-4xl font-bold").text(format!("${}", plan.price)))
                            .child(el("span").class("text-muted-foreground").text("/month")),
                    )
                    .child(el("ul").class("flex flex-col gap-2 text-sm").children(
                        plan.features.iter().map(|f| {
                            el("li").class("flex items-center gap-2").text(format!("\u{2713} {f}"))
                        }),
                    ))
                    .child(button("Get Started", plan.popular))
            }))),
    )
}

fn faq(p: &FaqProps, classes: &SectionClasses) -> Element {
    section(classes).child(
        container("max-w-3xl")
            .child(el("div").class("mb-12 text-center").child(heading(&p.title)))
            .child(el("div").class("divide-y").children(p.items.iter().map(|entry| {
                el("details")
                    .class("group py-4")
                    .child(el("summary").class("cursor-pointer font-medium").text(&entry.question))
                    .child(el("p").class("mt-2 text-muted-foreground").text(&entry.answer))
            }))),
    )
}

fn banner(p: &BannerProps, variant: &str, classes: &SectionClasses) -> Element {
    let link = el("a")
        .attr("href", "#")
        .class("font-semibold underline underline-offset-4")
        .text(&p.link_text);
    match variant {
        "box" => section(classes).child(container("").child(
            card(classes, "flex flex-col items-center justify-between gap-4 p-4 sm:flex-row")
                .child(el("p").class("text-sm").text(&p.text))
                .child(link),
        )),
        _ => section(classes).child(
            container("flex items-center justify-center gap-2")
                .child(el("span").text(&p.text))
                .child(link),
        ),
    }
}

fn cta(p: &CtaProps, variant: &str, classes: &SectionClasses) -> Element {
    match variant {
        "split" => section(classes).child(
            container("flex flex-col items-center justify-between gap-6 md:flex-row")
                .child(heading(&p.title))
                .child(button(&p.button_text, true)),
        ),
        "minimal" => section(classes).child(
            container("flex flex-col items-center gap-4")
                .child(heading(&p.title))
                .child(
                    el("a")
                        .attr("href", "#")
                        .class("font-medium text-primary underline-offset-4 hover:underline")
                        .text(format!("{} \u{2192}", p.button_text)),
                ),
        ),
        _ => section(classes).child(container("").child(
            el("div")
                .class("flex flex-col items-center gap-6 rounded-[var(--radius)] bg-muted px-6 py-12")
                .child(heading(&p.title))
                .child(button(&p.button_text, true)),
        )),
    }
}

fn newsletter(p: &NewsletterProps, classes: &SectionClasses) -> Element {
    section(classes).child(
        container("max-w-2xl")
            .child(heading(&p.title))
            .child(lead(&p.description))
            .child(
                el("form")
                    .class("mx-auto mt-6 flex w-full max-w-sm gap-2")
                    .child(
                        el("input")
                            .attr("type", "email")
                            .attr("placeholder", "Enter your email")
                            .class("flex-1 rounded-[var(--radius)] border bg-background px-3 py-2 text-sm"),
                    )
                    .child(
                        el("button")
                            .attr("type", "submit")
                            .class("rounded-[var(--radius)] bg-primary px-4 py-2 text-sm font-medium text-primary-foreground")
                            .text(&p.button_text),
                    ),
            ),
    )
}

fn form_field(id: &'static str, label: &str, multiline: bool) -> Element {
    let input_class = "w-full rounded-[var(--radius)] border bg-background px-3 py-2 text-sm";
    let control = if multiline {
        el("textarea").attr("id", id).attr("rows", "4").class(input_class)
    } else {
        el("input").attr("id", id).attr("type", if id == "email" { "email" } else { "text" }).class(input_class)
    };
    el("div")
        .class("flex flex-col gap-2")
        .child(el("label").attr("for", id).class("text-sm font-medium").text(label))
        .child(control)
}

fn contact_form(classes: &SectionClasses) -> Element {
    card(classes, "p-6").child(
        el("form")
            .class("flex flex-col gap-4")
            .child(form_field("name", "Name", false))
            .child(form_field("email", "Email", false))
            .child(form_field("message", "Message", true))
            .child(
                el("button")
                    .attr("type", "submit")
                    .class("rounded-[var(--radius)] bg-primary px-4 py-2 text-sm font-medium text-primary-foreground")
                    .text("Send Message"),
            ),
    )
}

fn contact(p: &HeadingProps, variant: &str, classes: &SectionClasses) -> Element {
    match variant {
        "split" => section(classes).child(
            container("grid gap-12 md:grid-cols-2")
                .child(
                    el("div")
                        .class("flex flex-col gap-4")
                        .child(heading(&p.title))
                        .child(muted(&p.description))
                        .child(el("p").class("text-sm").text("hello@example.com")),
                )
                .child(contact_form(classes)),
        ),
        _ => section(classes).child(
            container("max-w-xl")
                .child(header_block(&p.title, &p.description))
                .child(contact_form(classes)),
        ),
    }
}

fn play_surface(extra: &str) -> Element {
    el("div")
        .class(with_extra("flex aspect-video items-center justify-center bg-muted", extra))
        .child(
            el("span")
                .attr("aria-label", "Play video")
                .class("flex h-16 w-16 items-center justify-center rounded-full bg-primary text-primary-foreground")
                .text("\u{25b6}"),
        )
}

fn video(p: &HeadingProps, variant: &str, classes: &SectionClasses) -> Element {
    let frame = match variant {
        "plain" => play_surface("rounded-[var(--radius)]"),
        "full" => play_surface("w-full"),
        _ => el("div")
            .class("overflow-hidden rounded-[var(--radius)] border bg-card shadow-xl")
            .child(
                el("div")
                    .class("flex gap-1.5 border-b px-4 py-3")
                    .children((0..3).map(|_| el("span").class("h-3 w-3 rounded-full bg-muted"))),
            )
            .child(play_surface("")),
    };
    let width = if variant == "full" { "max-w-none" } else { "max-w-4xl" };
    section(classes).child(
        container(width)
            .child(header_block(&p.title, &p.description))
            .child(frame),
    )
}

fn content(p: &ContentProps, variant: &str, classes: &SectionClasses) -> Element {
    let prose = el("article")
        .class("flex flex-col gap-6")
        .child(heading(&p.title))
        .child(el("p").class("leading-7 text-muted-foreground").text(&p.content));
    match variant {
        "split-img" => section(classes).child(
            container("grid items-center gap-12 md:grid-cols-2")
                .child(prose)
                .child(el("div").class(format!("aspect-square {MEDIA}"))),
        ),
        _ => section(classes).child(container("max-w-3xl").child(prose)),
    }
}

fn footer(p: &FooterProps, classes: &SectionClasses) -> Element {
    el("footer").class(classes.section.clone()).child(
        container("flex flex-col items-center justify-between gap-4 md:flex-row")
            .child(el("p").class("text-sm text-muted-foreground").text(&p.text)),
    )
}
