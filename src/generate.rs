//! HTML site generation.
//!
//! Renders the whole [`SiteContent`] document into a single `index.html`. The
//! page is a fixed frame (navigation, footer, sticky consult bar) around the
//! orderable blocks listed in `sectionOrder`, rendered in that order.
//!
//! ## Output Structure
//!
//! ```text
//! dist/
//! └── index.html    # Everything: markup, inline CSS, inline JS
//! ```
//!
//! ## CSS and JavaScript
//!
//! Static assets are embedded at compile time:
//! - `static/style.css`: Base styles (brand colors injected from config)
//! - `static/site.js`: Hero rotation, store selection, contact form hand-off
//!
//! ## Section Rendering
//!
//! [`render_section`] matches every [`SectionKey`] exhaustively. An unknown
//! key renders nothing and is reported as skipped; it never fails the build.
//! Duplicate keys render once per occurrence.

use crate::config::{self, SiteConfig};
use crate::content::{SectionKey, SiteContent};
use crate::geo::MapBounds;
use maud::{DOCTYPE, Markup, PreEscaped, html};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

const CSS_STATIC: &str = include_str!("../static/style.css");
const JS: &str = include_str!("../static/site.js");

/// Maximum number of stars drawn for a review.
const MAX_STARS: i32 = 5;

/// One entry of `sectionOrder` and what became of it.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionSummary {
    pub key: SectionKey,
    /// Records in the section's list, `None` for unknown keys.
    pub item_count: Option<usize>,
    pub rendered: bool,
}

/// What [`generate`] wrote.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub output_path: PathBuf,
    pub sections: Vec<SectionSummary>,
}

impl GenerateReport {
    pub fn skipped(&self) -> impl Iterator<Item = &SectionSummary> {
        self.sections.iter().filter(|s| !s.rendered)
    }
}

pub fn generate(
    content: &SiteContent,
    config: &SiteConfig,
    output_dir: &Path,
) -> Result<GenerateReport, GenerateError> {
    fs::create_dir_all(output_dir)?;

    let page = render_page(content, config);
    let output_path = output_dir.join("index.html");
    fs::write(&output_path, page.into_string())?;

    let sections: Vec<SectionSummary> = content
        .section_order
        .iter()
        .map(|key| SectionSummary {
            key: key.clone(),
            item_count: content.item_count(key),
            rendered: key.is_known(),
        })
        .collect();
    tracing::info!(
        path = %output_path.display(),
        sections = sections.len(),
        "generated index.html"
    );

    Ok(GenerateReport {
        output_path,
        sections,
    })
}

/// Render the complete page.
pub fn render_page(content: &SiteContent, config: &SiteConfig) -> Markup {
    let color_css = config::generate_color_css(&config.colors);
    let css = format!("{}\n\n{}", color_css, CSS_STATIC);

    let body = html! {
        (site_header(content))
        main {
            @for key in &content.section_order {
                @if let Some(section) = render_section(key, content, &config.map) {
                    (section)
                }
            }
            (site_footer(content))
        }
        (consult_bar(content, config))
    };

    base_document(config, &css, body)
}

/// Render one orderable block. `None` for keys outside the closed set.
pub fn render_section(key: &SectionKey, content: &SiteContent, map: &MapBounds) -> Option<Markup> {
    let markup = match key {
        SectionKey::Hero => render_hero(content),
        SectionKey::Reviews => render_reviews(content),
        SectionKey::Benefits => render_benefits(content),
        SectionKey::Interior => render_interior(content),
        SectionKey::StartupCost => render_startup_cost(content),
        SectionKey::Menu => render_menu(content),
        SectionKey::Locations => render_locations(content, map),
        SectionKey::Franchise => render_franchise(content),
        SectionKey::Unknown(token) => {
            tracing::debug!(section = %token, "skipping unknown section");
            return None;
        }
    };
    Some(markup)
}

// ============================================================================
// HTML Components
// ============================================================================

/// Renders the base HTML document structure
fn base_document(config: &SiteConfig, css: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(config.site.lang) {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                meta name="description" content=(config.site.description);
                title { (config.site.title) }
                style { (PreEscaped(css)) }
            }
            body {
                (content)
                script { (PreEscaped(JS)) }
            }
        }
    }
}

fn nav_label(key: &SectionKey) -> Option<&'static str> {
    match key {
        SectionKey::Reviews => Some("고객 후기"),
        SectionKey::Benefits => Some("가맹 혜택"),
        SectionKey::Interior => Some("인테리어"),
        SectionKey::StartupCost => Some("창업 비용"),
        SectionKey::Menu => Some("메뉴"),
        SectionKey::Locations => Some("매장 안내"),
        SectionKey::Franchise => Some("가맹 문의"),
        SectionKey::Hero | SectionKey::Unknown(_) => None,
    }
}

/// Renders the top navigation: logo plus one link per listed block.
fn site_header(content: &SiteContent) -> Markup {
    let mut seen = HashSet::new();
    let links: Vec<(&str, &str)> = content
        .section_order
        .iter()
        .filter(|key| seen.insert(*key))
        .filter_map(|key| nav_label(key).map(|label| (key.as_str(), label)))
        .collect();

    html! {
        header.site-header {
            a.logo href="#hero" {
                img src=(content.header.logo) alt="ATOKETO Logo";
            }
            nav.site-nav {
                ul {
                    @for (anchor, label) in &links {
                        li { a href={ "#" (anchor) } { (label) } }
                    }
                }
            }
            a.nav-cta href="#franchise" { "Start Franchise" }
        }
    }
}

fn section_heading(title: &str, subtitle: Option<&str>) -> Markup {
    html! {
        div.section-heading {
            h2 { (multiline(title)) }
            @if let Some(subtitle) = subtitle.filter(|s| !s.is_empty()) {
                p.section-subtitle { (subtitle) }
            }
        }
    }
}

/// Text with `\n` rendered as line breaks.
fn multiline(text: &str) -> Markup {
    html! {
        @for (i, line) in text.split('\n').enumerate() {
            @if i > 0 { br; }
            (line)
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

// ============================================================================
// Section Renderers
// ============================================================================

fn render_hero(content: &SiteContent) -> Markup {
    let hero = &content.hero;
    html! {
        section id="hero" class="hero" {
            div.hero-slides {
                @for (i, image) in hero.images.iter().enumerate() {
                    div.hero-slide.active[i == 0] {
                        img src=(image) alt={ "Slide " (i + 1) };
                    }
                }
            }
            div.hero-content {
                h1.hero-title {
                    @for line in hero.title.split('\n') {
                        span.hero-line { (line) }
                    }
                }
                p.hero-subtitle { (hero.subtitle) }
                div.hero-actions {
                    a.btn.btn-light href="#menu" { (hero.cta_text) }
                    a.btn.btn-round href="#franchise" aria-label="가맹 문의" { "▶" }
                }
            }
        }
    }
}

fn render_reviews(content: &SiteContent) -> Markup {
    let reviews = &content.reviews;
    html! {
        section id="reviews" class="reviews" {
            (section_heading(&reviews.title, Some(&reviews.subtitle)))
            div.review-grid {
                @for review in &reviews.items {
                    @let stars = review.rating.clamp(0, MAX_STARS);
                    article.review-card data-id=(review.id.as_str()) {
                        div.review-author {
                            span.avatar { (review.author.chars().next().map(String::from).unwrap_or_default()) }
                            div {
                                p.author-name { (review.author) }
                                div.stars aria-label={ (stars) "/5" } {
                                    @for _ in 0..stars { span.star { "★" } }
                                }
                            }
                        }
                        blockquote.review-text { "\"" (review.content) "\"" }
                        div.review-footer {
                            img src=(review.image) alt="Review food" loading="lazy";
                            span.tag { (review.tag) }
                        }
                    }
                }
            }
        }
    }
}

fn render_benefits(content: &SiteContent) -> Markup {
    let benefits = &content.benefits;
    html! {
        section id="benefits" class="benefits" {
            (section_heading(&benefits.title, Some("성공적인 창업을 위한 아토키토의 약속")))
            div.benefit-grid {
                @for (i, item) in benefits.items.iter().enumerate() {
                    div.benefit-card data-id=(item.id.as_str()) {
                        div.benefit-head {
                            @if let Some(image) = non_empty(&item.image) {
                                span.benefit-icon { img src=(image) alt=""; }
                            } @else {
                                span.benefit-number { (i + 1) }
                            }
                            h3 { (item.title) }
                        }
                        p { (item.desc) }
                    }
                }
            }
        }
    }
}

fn render_interior(content: &SiteContent) -> Markup {
    let interior = &content.interior;
    html! {
        section id="interior" class="interior" {
            (section_heading(&interior.title, Some(&interior.subtitle)))
            div.interior-grid {
                @for item in &interior.items {
                    figure.interior-card data-id=(item.id.as_str()) {
                        img src=(item.image) alt=(item.name) loading="lazy";
                        figcaption { (item.name) }
                    }
                }
            }
        }
    }
}

fn render_startup_cost(content: &SiteContent) -> Markup {
    let cost = &content.startup_cost;
    html! {
        section id="startupCost" class="startup-cost" {
            (section_heading(&cost.title, Some(&cost.subtitle)))
            div.cost-grid {
                @for item in &cost.items {
                    div.cost-card.highlight[item.highlight] data-id=(item.id.as_str()) {
                        @if item.highlight {
                            span.badge { "Benefit" }
                        }
                        div.cost-icon {
                            @if let Some(image) = non_empty(&item.image) {
                                img src=(image) alt=(item.category);
                            } @else {
                                span.cost-symbol { "₩" }
                            }
                        }
                        h3 { (item.category) }
                        div.cost-prices {
                            @if let Some(original) = non_empty(&item.original_price) {
                                del.original-price { (original) }
                            }
                            strong.price { (item.price) }
                        }
                    }
                }
            }
            p.footnote {
                "* 별도공사: 철거, 전기증설, 냉난방기, 가스증설, 소방, 화장실 등 현장 상황에 따라 변동 가능"
            }
        }
    }
}

fn render_menu(content: &SiteContent) -> Markup {
    let menu = &content.menu;
    html! {
        section id="menu" class="menu" {
            p.eyebrow { "Signature Menu" }
            (section_heading(&menu.title, Some(&menu.subtitle)))
            div.menu-grid {
                @for item in &menu.items {
                    article.menu-card data-id=(item.id.as_str()) {
                        div.menu-image {
                            img src=(item.image) alt=(item.name) loading="lazy";
                        }
                        div.menu-title {
                            h3 { (item.name) }
                            span.price { (item.price) "원" }
                        }
                        p.eng-name { (item.eng_name) }
                        p.description { (item.description) }
                    }
                }
            }
        }
    }
}

fn render_locations(content: &SiteContent, map: &MapBounds) -> Markup {
    let locations = &content.locations;
    html! {
        section id="locations" class="locations" {
            (section_heading(&locations.title, Some("전국 어디서나 아토키토를 만나보세요")))
            div.locations-layout {
                ul.store-list {
                    @for (i, store) in locations.list.iter().enumerate() {
                        li.store.selected[i == 0] data-store=(i) {
                            h4 { (store.name) }
                            p { (store.address) }
                        }
                    }
                }
                div.store-map {
                    div.map-image style={ "background-image: url('" (locations.map_image) "')" } {}
                    @for (i, store) in locations.list.iter().enumerate() {
                        @let position = map.project(store.lat, store.lng);
                        div.pin.active[i == 0] data-store=(i) style=(position.to_css()) {
                            span.pin-marker {}
                            span.pin-label { (store.name) }
                        }
                    }
                }
            }
        }
    }
}

fn render_franchise(content: &SiteContent) -> Markup {
    let franchise = &content.franchise;
    html! {
        section id="franchise" class="franchise" {
            (section_heading(&franchise.title, Some(&franchise.subtitle)))
            a.phone href={ "tel:" (franchise.contact_phone) } { (franchise.contact_phone) }
            @if !franchise.stats.is_empty() {
                div.stat-grid {
                    @for stat in &franchise.stats {
                        div.stat data-id=(stat.id.as_str()) {
                            strong { (stat.highlight) }
                            h3 { (stat.title) }
                            p { (stat.subtitle) }
                        }
                    }
                }
            }
            form.inquiry-form data-form="inquiry" novalidate {
                div.field-row {
                    label {
                        "이름"
                        input type="text" name="name" placeholder="성함을 입력해주세요";
                    }
                    label {
                        "연락처"
                        input type="tel" name="phone" placeholder="010-0000-0000";
                    }
                }
                label {
                    "희망 지역"
                    input type="text" name="location" placeholder="예: 서울 강남구";
                }
                button type="submit" { "무료 상담 신청하기" }
                p.form-note { "개인정보 수집 및 이용에 동의합니다." }
            }
        }
    }
}

// ============================================================================
// Page Chrome
// ============================================================================

fn site_footer(content: &SiteContent) -> Markup {
    html! {
        footer.site-footer {
            p.address { (content.footer.address) }
            p.copyright { (content.footer.copyright) }
        }
    }
}

/// The sticky bar with the contact phone and the quick-consult form.
fn consult_bar(content: &SiteContent, config: &SiteConfig) -> Markup {
    let contact = &config.contact;
    html! {
        div.consult-bar
            data-email=(contact.email)
            data-quick-subject=(contact.quick_subject)
            data-inquiry-subject=(contact.inquiry_subject)
            data-inquiry-closing=(contact.inquiry_closing)
        {
            div.consult-phone {
                span { "가맹문의" }
                strong { (content.franchise.contact_phone) }
            }
            form.quick-form data-form="quick" novalidate {
                input type="text" name="message" placeholder="이름/지역/전화번호";
                button type="submit" { "상담 신청" }
                label.consent {
                    input type="checkbox" name="agree";
                    span { "동의" }
                }
            }
        }
    }
}
