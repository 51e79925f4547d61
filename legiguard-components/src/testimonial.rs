//! Testimonial content shown in the spotlight carousel and the testimonial
//! wall.
//!
//! ## Usage
//!
//! Feed [`spotlight`] to the carousel and [`wall`] to the masonry grid below
//! it. Captions such as [`Testimonial::industry`] are derived from the data
//! rather than stored.

use std::fmt;

/// Image shown when a named avatar fails to load.
pub const AVATAR_FALLBACK: &str = "/user.png";

/// Number of testimonials featured in the spotlight carousel.
pub const SPOTLIGHT_LEN: usize = 3;

/// One customer quote.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Testimonial {
    /// The quote itself, without surrounding quotation marks.
    pub quote: &'static str,
    /// First name of the author.
    pub name: &'static str,
    /// Role and company description of the author.
    pub title: &'static str,
}

/// Industry caption derived from a testimonial title.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Industry {
    /// Software as a service.
    Saas,
    /// Financial technology.
    Fintech,
    /// General technology.
    Tech,
    /// Artificial intelligence.
    Ai,
    /// Healthcare.
    Healthcare,
    /// Compliance services.
    Compliance,
    /// Anything else.
    Enterprise,
}

impl Industry {
    /// Keyword table, checked in order; more specific words come first.
    const KEYWORDS: [(&'static str, Industry); 6] = [
        ("saas", Industry::Saas),
        ("fintech", Industry::Fintech),
        ("tech", Industry::Tech),
        ("ai", Industry::Ai),
        ("health", Industry::Healthcare),
        ("compliance", Industry::Compliance),
    ];

    /// Classifies a job title by its words.
    ///
    /// Matching is on whole words rather than substrings, so "Chair" does not
    /// read as AI. `fintech` is checked before `tech`, so a fintech title is
    /// captioned Fintech and not Tech.
    pub fn from_title(title: &str) -> Self {
        let words: Vec<String> = title
            .split(|c: char| !c.is_alphanumeric())
            .filter(|word| !word.is_empty())
            .map(str::to_lowercase)
            .collect();
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| words.iter().any(|word| word == keyword))
            .map(|(_, industry)| *industry)
            .unwrap_or(Industry::Enterprise)
    }

    /// Caption text.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Saas => "SaaS",
            Self::Fintech => "Fintech",
            Self::Tech => "Tech",
            Self::Ai => "AI",
            Self::Healthcare => "Healthcare",
            Self::Compliance => "Compliance",
            Self::Enterprise => "Enterprise",
        }
    }
}

impl fmt::Display for Industry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Testimonial {
    /// Industry caption for this testimonial.
    pub fn industry(&self) -> Industry {
        Industry::from_title(self.title)
    }

    /// Path of the author's avatar image.
    pub fn avatar_path(&self) -> String {
        format!("/{}.png", self.name.to_lowercase())
    }

    /// Byline shown under the quote.
    pub fn attribution(&self) -> String {
        format!("{}, {}", self.name, self.title)
    }
}

static TESTIMONIALS: [Testimonial; 6] = [
    Testimonial {
        quote: "Before LegiGuard, our compliance efforts felt like a never-ending uphill battle. We were buried in spreadsheets and manual documentation. With their automated compliance system, we cut our SOC 2 audit prep time from 6 weeks to just 5 days.",
        name: "Isabella",
        title: "COO at a SaaS company",
    },
    Testimonial {
        quote: "LegiGuard completely transformed our risk management workflow. Their team didn’t just plug in a solution. They studied our infrastructure, understood our challenges, and built a compliance engine tailored to our needs. We now close enterprise deals faster because security reviews are no longer a bottleneck.",
        name: "Daniel",
        title: "CEO at a tech company",
    },
    Testimonial {
        quote: "As an AI company, compliance and model governance were critical for trust and scale. LegiGuard helped us define robust policies and translate them into code-level enforcement, all while staying agile. Their approach to policy-aware workflows has become a strategic asset for our GTM motion.",
        name: "Ava",
        title: "CTO at an AI startup",
    },
    Testimonial {
        quote: "Launching in the fintech space comes with intense scrutiny. LegiGuard gave us the compliance backbone we needed to scale with confidence. We automated policy updates, reduced onboarding friction for enterprise clients, and passed our ISO 27001 audit with zero major findings.",
        name: "Liam",
        title: "Product Lead at a fintech company",
    },
    Testimonial {
        quote: "I’ve worked with a dozen compliance vendors over the years, and LegiGuard is in a league of its own. Their AI-powered audit layer gave us full visibility and control, while their team guided us like true partners. We felt ready on day one of our audit, and we continue to use them.",
        name: "Sophia",
        title: "Founder at a health company",
    },
    Testimonial {
        quote: "Security used to slow us down, until we integrated LegiGuard. Real-time alerts, documentation automation, and hands-on guidance turned compliance from a blocker into a competitive advantage. We went from chasing checklists to proactively owning our posture.",
        name: "Ethan",
        title: "Co-Founder at a compliance firm",
    },
];

/// Every testimonial, in display order.
pub fn all() -> &'static [Testimonial] {
    &TESTIMONIALS
}

/// Testimonials featured in the spotlight carousel.
pub fn spotlight() -> &'static [Testimonial] {
    &TESTIMONIALS[..SPOTLIGHT_LEN]
}

/// Testimonials shown on the wall below the carousel.
pub fn wall() -> &'static [Testimonial] {
    all()
}
