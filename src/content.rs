//! The site content tree.
//!
//! Everything the page displays lives in one [`SiteContent`] document: a fixed
//! set of named sections, each holding scalar text fields and at most a few
//! ordered lists of item records. The document serializes to JSON with
//! camelCase keys (`startupCost`, `contactPhone`, `engName`), and those keys
//! are also the names the [`editor`](crate::editor) addresses.
//!
//! ## Section Keys vs Sections
//!
//! Two enums name parts of the document:
//!
//! - [`SectionKey`] is the vocabulary of `sectionOrder`, the eight blocks the
//!   page renders in user-controlled order. Tokens outside the set survive a
//!   load as [`SectionKey::Unknown`] and render nothing.
//! - [`Section`] is every top-level object the editor may touch, which adds
//!   the fixed page chrome (`header`, `footer`) to the orderable blocks.
//!
//! ## Item Identity
//!
//! Every list record carries an [`ItemId`]. Documents that omit ids get fresh
//! UUIDs at load time, so list edits can be addressed by identity as well as
//! by position.

use crate::editor::EditError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContentError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Stable identity of a list item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// A fresh random identity (UUID v4, simple form).
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Section vocabulary
// =============================================================================

/// A token in `sectionOrder`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SectionKey {
    Hero,
    Reviews,
    Benefits,
    Interior,
    StartupCost,
    Menu,
    Locations,
    Franchise,
    /// A token outside the closed set. Kept so the document round-trips.
    Unknown(String),
}

impl SectionKey {
    /// The closed set, in default page order.
    pub const ALL: [SectionKey; 8] = [
        SectionKey::Hero,
        SectionKey::Reviews,
        SectionKey::Benefits,
        SectionKey::Interior,
        SectionKey::StartupCost,
        SectionKey::Menu,
        SectionKey::Locations,
        SectionKey::Franchise,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            SectionKey::Hero => "hero",
            SectionKey::Reviews => "reviews",
            SectionKey::Benefits => "benefits",
            SectionKey::Interior => "interior",
            SectionKey::StartupCost => "startupCost",
            SectionKey::Menu => "menu",
            SectionKey::Locations => "locations",
            SectionKey::Franchise => "franchise",
            SectionKey::Unknown(token) => token,
        }
    }

    /// The document section backing this key, if the key is recognized.
    pub fn section(&self) -> Option<Section> {
        match self {
            SectionKey::Hero => Some(Section::Hero),
            SectionKey::Reviews => Some(Section::Reviews),
            SectionKey::Benefits => Some(Section::Benefits),
            SectionKey::Interior => Some(Section::Interior),
            SectionKey::StartupCost => Some(Section::StartupCost),
            SectionKey::Menu => Some(Section::Menu),
            SectionKey::Locations => Some(Section::Locations),
            SectionKey::Franchise => Some(Section::Franchise),
            SectionKey::Unknown(_) => None,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, SectionKey::Unknown(_))
    }
}

impl From<&str> for SectionKey {
    fn from(token: &str) -> Self {
        SectionKey::ALL
            .into_iter()
            .find(|key| key.as_str() == token)
            .unwrap_or_else(|| SectionKey::Unknown(token.to_string()))
    }
}

impl From<String> for SectionKey {
    fn from(token: String) -> Self {
        SectionKey::from(token.as_str())
    }
}

impl From<SectionKey> for String {
    fn from(key: SectionKey) -> Self {
        match key {
            SectionKey::Unknown(token) => token,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A top-level object of the document that the editor can address.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Header,
    Hero,
    Reviews,
    Benefits,
    Interior,
    StartupCost,
    Menu,
    Locations,
    Franchise,
    Footer,
}

impl Section {
    pub const ALL: [Section; 10] = [
        Section::Header,
        Section::Hero,
        Section::Reviews,
        Section::Benefits,
        Section::Interior,
        Section::StartupCost,
        Section::Menu,
        Section::Locations,
        Section::Franchise,
        Section::Footer,
    ];

    /// The document key, identical to the serialized field name.
    pub fn as_str(self) -> &'static str {
        match self {
            Section::Header => "header",
            Section::Hero => "hero",
            Section::Reviews => "reviews",
            Section::Benefits => "benefits",
            Section::Interior => "interior",
            Section::StartupCost => "startupCost",
            Section::Menu => "menu",
            Section::Locations => "locations",
            Section::Franchise => "franchise",
            Section::Footer => "footer",
        }
    }
}

impl FromStr for Section {
    type Err = EditError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Section::ALL
            .into_iter()
            .find(|section| section.as_str() == s)
            .ok_or_else(|| EditError::InvalidSection(s.to_string()))
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Document
// =============================================================================

/// The whole editable site.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct SiteContent {
    /// Render order of the page blocks.
    pub section_order: Vec<SectionKey>,
    pub header: HeaderContent,
    pub hero: HeroContent,
    pub reviews: ReviewsContent,
    pub benefits: BenefitsContent,
    pub interior: InteriorContent,
    pub startup_cost: StartupCostContent,
    pub menu: MenuContent,
    pub locations: LocationsContent,
    pub franchise: FranchiseContent,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeaderContent {
    /// Logo image reference (URL or data URI).
    pub logo: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct HeroContent {
    /// Headline; each `\n` starts a new display line.
    pub title: String,
    pub subtitle: String,
    pub cta_text: String,
    /// Background slides, in rotation order.
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReviewsContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<ReviewItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ReviewItem {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub author: String,
    /// Star rating, expected 1–5 but not validated.
    pub rating: i32,
    pub content: String,
    pub image: String,
    /// Short label, usually the reviewed menu item.
    pub tag: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BenefitsContent {
    pub title: String,
    pub items: Vec<BenefitItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BenefitItem {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub title: String,
    pub desc: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InteriorContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<InteriorItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct InteriorItem {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub name: String,
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StartupCostContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<StartupCostItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StartupCostItem {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub category: String,
    pub price: String,
    /// Pre-discount price, shown struck through.
    #[serde(default)]
    pub original_price: Option<String>,
    #[serde(default)]
    pub highlight: bool,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MenuContent {
    pub title: String,
    pub subtitle: String,
    pub items: Vec<MenuItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MenuItem {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub name: String,
    pub eng_name: String,
    pub description: String,
    pub image: String,
    /// Display price without currency, e.g. `"9,000"`.
    pub price: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct LocationsContent {
    pub title: String,
    /// Background image of the store map.
    pub map_image: String,
    pub list: Vec<StoreLocation>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct StoreLocation {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FranchiseContent {
    pub title: String,
    pub subtitle: String,
    pub contact_phone: String,
    pub stats: Vec<FranchiseStat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FranchiseStat {
    #[serde(default = "ItemId::generate")]
    pub id: ItemId,
    /// The big number, e.g. `"0%"`.
    pub highlight: String,
    pub title: String,
    pub subtitle: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FooterContent {
    pub copyright: String,
    pub address: String,
}

/// A problem with `sectionOrder` that does not stop rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderIssue {
    /// Token outside the closed set; renders nothing.
    Unknown(String),
    /// Key listed more than once; renders once per occurrence.
    Duplicate(SectionKey),
    /// Known key not listed; its data is never rendered.
    Missing(SectionKey),
}

impl fmt::Display for OrderIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderIssue::Unknown(token) => write!(f, "unknown section '{token}' is skipped"),
            OrderIssue::Duplicate(key) => write!(f, "section '{key}' is listed more than once"),
            OrderIssue::Missing(key) => write!(f, "section '{key}' is not listed and will not render"),
        }
    }
}

impl SiteContent {
    /// Number of records in the list a section key renders, if it has one.
    pub fn item_count(&self, key: &SectionKey) -> Option<usize> {
        match key {
            SectionKey::Hero => Some(self.hero.images.len()),
            SectionKey::Reviews => Some(self.reviews.items.len()),
            SectionKey::Benefits => Some(self.benefits.items.len()),
            SectionKey::Interior => Some(self.interior.items.len()),
            SectionKey::StartupCost => Some(self.startup_cost.items.len()),
            SectionKey::Menu => Some(self.menu.items.len()),
            SectionKey::Locations => Some(self.locations.list.len()),
            SectionKey::Franchise => Some(self.franchise.stats.len()),
            SectionKey::Unknown(_) => None,
        }
    }

    /// Diagnose `sectionOrder`: unknown tokens, duplicates, and omitted keys.
    pub fn order_issues(&self) -> Vec<OrderIssue> {
        let mut issues = Vec::new();
        let mut seen = HashSet::new();
        for key in &self.section_order {
            if let SectionKey::Unknown(token) = key {
                issues.push(OrderIssue::Unknown(token.clone()));
            } else if !seen.insert(key) {
                issues.push(OrderIssue::Duplicate(key.clone()));
            }
        }
        for key in SectionKey::ALL {
            if !self.section_order.contains(&key) {
                issues.push(OrderIssue::Missing(key));
            }
        }
        issues
    }
}

/// Load a document from a JSON file, or the built-in default when no path is given.
pub fn load_content(path: Option<&Path>) -> Result<SiteContent, ContentError> {
    match path {
        Some(path) => {
            let json = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&json)?)
        }
        None => Ok(SiteContent::default()),
    }
}

// =============================================================================
// Default document
// =============================================================================

const LOGO: &str = "data:image/svg+xml,%3Csvg xmlns='http://www.w3.org/2000/svg' viewBox='0 0 400 120' fill='none'%3E%3Ctext x='200' y='35' text-anchor='middle' font-family='sans-serif' font-weight='700' fill='%23008037' letter-spacing='4px' font-size='14px'%3EPREMIUM FRESH POKE%3C/text%3E%3Ctext x='200' y='105' text-anchor='middle' font-family='sans-serif' font-weight='900' font-size='72' letter-spacing='-3' fill='%23008037'%3EATOKETO%3C/text%3E%3C/svg%3E";

const MAP_IMAGE: &str = "https://upload.wikimedia.org/wikipedia/commons/thumb/0/09/South_Korea_location_map.svg/1066px-South_Korea_location_map.svg.png";

fn unsplash(photo: &str, width: u32) -> String {
    format!("https://images.unsplash.com/photo-{photo}?w={width}&q=80")
}

fn icon(name: &str) -> Option<String> {
    Some(format!("https://img.icons8.com/fluency/96/{name}.png"))
}

fn review(id: &str, author: &str, content: &str, photo: &str, tag: &str) -> ReviewItem {
    ReviewItem {
        id: ItemId::new(id),
        author: author.to_string(),
        rating: 5,
        content: content.to_string(),
        image: unsplash(photo, 200),
        tag: tag.to_string(),
    }
}

fn menu_item(id: &str, name: &str, eng_name: &str, description: &str, price: &str, photo: &str) -> MenuItem {
    MenuItem {
        id: ItemId::new(id),
        name: name.to_string(),
        eng_name: eng_name.to_string(),
        description: description.to_string(),
        image: unsplash(photo, 500),
        price: price.to_string(),
    }
}

fn benefit(title: &str, desc: &str) -> BenefitItem {
    BenefitItem {
        id: ItemId::generate(),
        title: title.to_string(),
        desc: desc.to_string(),
        image: None,
    }
}

fn interior(name: &str, photo: &str) -> InteriorItem {
    InteriorItem {
        id: ItemId::generate(),
        name: name.to_string(),
        image: unsplash(photo, 800),
    }
}

fn cost(category: &str, price: &str, original_price: Option<&str>, highlight: bool, icon_name: &str) -> StartupCostItem {
    StartupCostItem {
        id: ItemId::generate(),
        category: category.to_string(),
        price: price.to_string(),
        original_price: original_price.map(str::to_string),
        highlight,
        image: icon(icon_name),
    }
}

fn stat(highlight: &str, title: &str, subtitle: &str) -> FranchiseStat {
    FranchiseStat {
        id: ItemId::generate(),
        highlight: highlight.to_string(),
        title: title.to_string(),
        subtitle: subtitle.to_string(),
    }
}

fn store(name: &str, address: &str, lat: f64, lng: f64) -> StoreLocation {
    StoreLocation {
        id: ItemId::generate(),
        name: name.to_string(),
        address: address.to_string(),
        lat,
        lng,
    }
}

impl Default for SiteContent {
    /// The hardcoded document the site starts from on every run.
    fn default() -> Self {
        Self {
            section_order: SectionKey::ALL.to_vec(),
            header: HeaderContent {
                logo: LOGO.to_string(),
            },
            hero: HeroContent {
                title: "Freshness\nYou Can Taste".to_string(),
                subtitle: "매일 아침 배송되는 신선한 재료와\n아토키토만의 특제 소스로 완성된 완벽한 한 끼.\n건강한 라이프스타일을 시작하세요.".to_string(),
                cta_text: "가맹 상담 신청하기".to_string(),
                images: vec![
                    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?q=80&w=2000&auto=format&fit=crop".to_string(),
                    "https://images.unsplash.com/photo-1512621776951-a57141f2eefd?q=80&w=2000&auto=format&fit=crop".to_string(),
                    "https://images.unsplash.com/photo-1623428187969-5da2dcea5ebf?q=80&w=2000&auto=format&fit=crop".to_string(),
                ],
            },
            reviews: ReviewsContent {
                title: "고객님의 솔직 리뷰".to_string(),
                subtitle: "수익률만 좋냐고요? 맛도 좋습니다!".to_string(),
                items: vec![
                    review(
                        "r1",
                        "꼬깔룸",
                        "흑흑 2주동안 먹고싶을때마다 배민닫혀잇길래 다른데도먹어봣지만 실망하고 역시 여기가짱이에요ㅠㅠ 사장님 맛있게만들어주셔서감사합니다!!! 재료도신선하고 맛은 말할것도없고 양도좋고 정말맛있어서 일주일에1번은무조건먹어야하는메뉴가된거같아요",
                        "1546069901-ba9599a7e63c",
                        "수비드 목살 샐러드",
                    ),
                    review(
                        "r2",
                        "배민수수료나빠",
                        "저희 항상 이곳에서 포케를 주문합니다. 아들딸 두아이 모두 좋아해요. 한번은 다른데서 시켰다가 애들이 어찌나 뭐라하던지..ㅋ 맛있게 잘 먹겠습니다!",
                        "1553621042-f6e147245754",
                        "연어 포케 현미밥",
                    ),
                    review(
                        "r3",
                        "맛집리뷰인",
                        "하 진짜 포케계의 빅뱅같은... 너무 맛있어서 맨날 여기서만 시켜먹어요. 포케는 말할것도 없고 그릭요거트...진짜 코코넛이랑 꾸덕 촉촉한 그릭이 생각나서 맨날 먹고싶을 정도에요. 요 저 거의 맨날 시켜먹을게요 사랑합니다 오래오래 영업해주세요..❤️",
                        "1621532296705-4b93fb5f524e",
                        "허니 그레이프 그릭요거트",
                    ),
                    review(
                        "r4",
                        "코코",
                        "오랜만에 포케랑 샌드위치가 땡겨서 시켜먹었는데.. 역시 아토키토 갈릭바질소스가 최고네요 진짜 너무너무 맛있게 먹어서 하루종일 든든했어요..!! 샌드위치도 야채 통통하게 채워주시고 고기도 많고 블루베리잼?이랑도 궁합이 진짜 좋았어요 진짜진짜 맛있었어용 👍👍",
                        "1600454309261-3dc9b7597637",
                        "수비드 목살 샌드위치",
                    ),
                ],
            },
            benefits: BenefitsContent {
                title: "점주님과 함께 성장하기 위한 9가지 특급 혜택!".to_string(),
                items: vec![
                    benefit("가맹비 전액 지원", "1,000만원 → 0원"),
                    benefit("로열티 6개월 면제", "10호점까지 오픈 후 6개월 면제"),
                    benefit("이행보증금 면제", "초기 부담금 ZERO"),
                    benefit("마케팅 50% 지원", "온라인 홍보 마케팅 50% 지원"),
                    benefit("배달 플랫폼 공략 교육", "배달의민족, 쿠팡이츠 등 실전 노하우"),
                    benefit("1:1 전담 케어", "오픈 후 1:1 전담 케어 서비스"),
                    benefit("물품 50% 지원", "초도 물품 50% 지원"),
                    benefit("오픈 지원", "2주 교육 or 오픈 지원 2주"),
                    benefit("인테리어 자체 시공 가능", "강제성 없는 합리적 창업"),
                ],
            },
            interior: InteriorContent {
                title: "아토키토만의\n깔끔한 인테리어!".to_string(),
                subtitle: "Interior".to_string(),
                items: vec![
                    interior("마포점", "1554118811-1e0d58224f24"),
                    interior("마곡점", "1559925393-8be0ec4767c8"),
                    interior("역삼점", "1560624052-449f5ddf0c31"),
                    interior("은계점", "1550966871-3ed3c47e2ce2"),
                ],
            },
            startup_cost: StartupCostContent {
                title: "아토키토 창업비용".to_string(),
                subtitle: "13평 기준 / VAT 별도".to_string(),
                items: vec![
                    cost("가맹비", "0원", Some("1,000만원"), true, "shop"),
                    cost("교육비", "500만원", None, false, "classroom"),
                    cost("계약이행보증금", "0원", None, false, "contract"),
                    cost("로열티", "6개월 면제", Some("10호점까지"), true, "crown"),
                    cost("인테리어", "평당 180만원", None, false, "interior"),
                    cost("주방기기 / 기물", "1,600만원", Some("2,132만원"), true, "kitchenware"),
                    cost("아웃테리어 / 간판", "600만원", Some("803만원"), true, "billboard"),
                    cost("홍보물 / 의탁자", "600만원", Some("813만원"), true, "table"),
                ],
            },
            menu: MenuContent {
                title: "시그니처 메뉴".to_string(),
                subtitle: "Taste the freshness of nature".to_string(),
                items: vec![
                    menu_item("1", "슈퍼 세븐 볼", "Super Seven Bowl", "케일, 블루베리, 김치, 그래놀라가 어우러진 완벽한 영양 밸런스.", "9,000", "1546069901-ba9599a7e63c"),
                    menu_item("2", "튜나 찹 라멘", "Tuna Chop Ramen", "신선한 참치와 메밀면, 오렌지 진저 드레싱의 상큼한 조화.", "8,500", "1553621042-f6e147245754"),
                    menu_item("3", "아보카도 반미", "Avocado Banh Mi", "부드러운 아보카도와 바삭한 바게트의 건강한 샌드위치.", "9,500", "1600454309261-3dc9b7597637"),
                    menu_item("4", "프로틴 머슬 팩", "Protein Muscle Pack", "닭가슴살 200g과 구운 야채로 꽉 채운 고단백 식단.", "11,000", "1511690656952-34342d5c71df"),
                    menu_item("5", "바질 오일 파스타", "Basil Oil Pasta", "향긋한 바질 페스토와 엑스트라 버진 올리브 오일의 풍미.", "12,000", "1473093226795-af9932fe5856"),
                    menu_item("6", "스파이시 로제 파스타", "Spicy Rose Pasta", "부드러운 크림소스에 매콤함을 더한 중독성 있는 맛.", "13,000", "1608219992759-8d74ed8d76eb"),
                ],
            },
            locations: LocationsContent {
                title: "Store Locations".to_string(),
                map_image: MAP_IMAGE.to_string(),
                list: vec![
                    store("분당 야탑직영점", "경기 성남시 분당구 성남대로925번길 37", 37.411, 127.128),
                    store("서울 보라매점", "서울 관악구 봉천로7길 41", 37.491, 126.924),
                    store("서울 성수점", "서울 성동구 광나루로6길 35", 37.548, 127.056),
                    store("하남 위례점", "경기 하남시 위례중앙로 185", 37.471, 127.143),
                    store("경기 광주점", "경기 광주시 태전중앙1길 5", 37.399, 127.221),
                    store("서울 가좌점", "서울 서대문구 수색로6길 17-14", 37.568, 126.913),
                    store("고양 식사점", "경기 고양시 일산동구 위시티로 81", 37.674, 126.809),
                    store("고양 삼송직영점", "경기 고양시 덕양구 삼송로 222", 37.649, 126.897),
                    store("일산 주엽점", "고양시 일산서구 중앙로 1470", 37.670, 126.761),
                    store("가든파이브점", "서울시 송파구 충민로 52", 37.478, 127.125),
                    store("송파 문정점", "서울특별시 송파구 문정동 644-2", 37.485, 127.122),
                    store("경희대 국제캠퍼스점", "경기도 수원시 영통구 영일로 16-4", 37.239, 127.081),
                ],
            },
            franchise: FranchiseContent {
                title: "Start Your Journey".to_string(),
                subtitle: "아토키토와 함께 건강한 성공을 만드세요.\n전문 컨설턴트가 상권 분석부터 오픈까지 함께합니다.".to_string(),
                contact_phone: "1533-3711".to_string(),
                stats: vec![
                    stat("0%", "가맹점 폐업율", "2021~2025.01 기준"),
                    stat("4,200만원", "전지점 평균매출", "마이프차 인증완료"),
                    stat("주6일 배송", "아워홈 물류계약", "안정적 식자재 공급"),
                    stat("1위", "동종업계 맛집랭킹", "전지점 상위권 달성"),
                ],
            },
            footer: FooterContent {
                copyright: "© 2024 ATOKETO. All rights reserved.".to_string(),
                address: "서울특별시 강남구 테헤란로 123 아토키토 빌딩 2층".to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_document_lists_every_section_in_order() {
        let content = SiteContent::default();
        assert_eq!(content.section_order, SectionKey::ALL.to_vec());
        assert!(content.order_issues().is_empty());
    }

    #[test]
    fn default_document_list_sizes() {
        let content = SiteContent::default();
        assert_eq!(content.reviews.items.len(), 4);
        assert_eq!(content.menu.items.len(), 6);
        assert_eq!(content.benefits.items.len(), 9);
        assert_eq!(content.interior.items.len(), 4);
        assert_eq!(content.startup_cost.items.len(), 8);
        assert_eq!(content.locations.list.len(), 12);
        assert_eq!(content.franchise.stats.len(), 4);
        assert_eq!(content.hero.images.len(), 3);
    }

    #[test]
    fn default_ids_are_unique_within_each_list() {
        let content = SiteContent::default();
        let ids: HashSet<&ItemId> = content.startup_cost.items.iter().map(|i| &i.id).collect();
        assert_eq!(ids.len(), content.startup_cost.items.len());
        assert_eq!(content.menu.items[0].id.as_str(), "1");
        assert_eq!(content.reviews.items[1].id.as_str(), "r2");
    }

    // =========================================================================
    // Section key tests
    // =========================================================================

    #[test]
    fn section_key_parses_known_tokens() {
        assert_eq!(SectionKey::from("startupCost"), SectionKey::StartupCost);
        assert_eq!(SectionKey::from("hero"), SectionKey::Hero);
    }

    #[test]
    fn section_key_keeps_unknown_tokens() {
        let key = SectionKey::from("brandStory");
        assert_eq!(key, SectionKey::Unknown("brandStory".to_string()));
        assert_eq!(key.as_str(), "brandStory");
        assert!(!key.is_known());
        assert_eq!(key.section(), None);
    }

    #[test]
    fn section_order_serializes_as_plain_tokens() {
        let order = vec![SectionKey::Menu, SectionKey::Unknown("promo".to_string())];
        let json = serde_json::to_string(&order).unwrap();
        assert_eq!(json, r#"["menu","promo"]"#);
        let back: Vec<SectionKey> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, order);
    }

    #[test]
    fn section_parses_document_keys() {
        assert_eq!("startupCost".parse::<Section>().unwrap(), Section::StartupCost);
        assert_eq!("footer".parse::<Section>().unwrap(), Section::Footer);
    }

    #[test]
    fn section_rejects_unknown_names() {
        let err = "startup_cost".parse::<Section>().unwrap_err();
        assert!(matches!(err, EditError::InvalidSection(name) if name == "startup_cost"));
    }

    // =========================================================================
    // Serialization tests
    // =========================================================================

    #[test]
    fn document_uses_camel_case_keys() {
        let value = serde_json::to_value(SiteContent::default()).unwrap();
        assert!(value.get("sectionOrder").is_some());
        assert!(value.get("startupCost").is_some());
        assert_eq!(value["franchise"]["contactPhone"], "1533-3711");
        assert_eq!(value["menu"]["items"][0]["engName"], "Super Seven Bowl");
    }

    #[test]
    fn optional_fields_serialize_as_null() {
        let value = serde_json::to_value(SiteContent::default()).unwrap();
        let education = &value["startupCost"]["items"][1];
        assert!(education["originalPrice"].is_null());
        assert_eq!(education["highlight"], false);
    }

    #[test]
    fn missing_ids_are_generated_on_load() {
        let json = r#"{"name": "마포점", "image": "https://example.com/a.jpg"}"#;
        let item: InteriorItem = serde_json::from_str(json).unwrap();
        assert!(!item.id.as_str().is_empty());
    }

    #[test]
    fn unknown_document_keys_rejected() {
        let mut value = serde_json::to_value(SiteContent::default()).unwrap();
        value["brandStory"] = serde_json::json!({ "title": "x" });
        let result: Result<SiteContent, _> = serde_json::from_value(value);
        assert!(result.is_err());
    }

    // =========================================================================
    // Order diagnostics
    // =========================================================================

    #[test]
    fn order_issues_reports_unknown_duplicate_and_missing() {
        let mut content = SiteContent::default();
        content.section_order = vec![
            SectionKey::Hero,
            SectionKey::Unknown("promo".to_string()),
            SectionKey::Menu,
            SectionKey::Hero,
        ];
        let issues = content.order_issues();
        assert!(issues.contains(&OrderIssue::Unknown("promo".to_string())));
        assert!(issues.contains(&OrderIssue::Duplicate(SectionKey::Hero)));
        assert!(issues.contains(&OrderIssue::Missing(SectionKey::Franchise)));
        assert!(!issues.contains(&OrderIssue::Missing(SectionKey::Menu)));
    }

    #[test]
    fn item_count_follows_section_lists() {
        let content = SiteContent::default();
        assert_eq!(content.item_count(&SectionKey::Menu), Some(6));
        assert_eq!(content.item_count(&SectionKey::Locations), Some(12));
        assert_eq!(content.item_count(&SectionKey::Unknown("x".into())), None);
    }

    // =========================================================================
    // load_content tests
    // =========================================================================

    #[test]
    fn load_content_without_path_is_default() {
        let content = load_content(None).unwrap();
        assert_eq!(content.franchise.contact_phone, "1533-3711");
    }

    #[test]
    fn load_content_reads_json_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("content.json");
        let mut content = SiteContent::default();
        content.footer.address = "부산".to_string();
        fs::write(&path, serde_json::to_string_pretty(&content).unwrap()).unwrap();

        let loaded = load_content(Some(path.as_path())).unwrap();
        assert_eq!(loaded, content);
    }

    #[test]
    fn load_content_invalid_json_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("content.json");
        fs::write(&path, "{ not json").unwrap();
        assert!(matches!(load_content(Some(path.as_path())), Err(ContentError::Json(_))));
    }
}
