//! Static portfolio content: three categories, each with an ordered list of
//! project case studies.
//!
//! The catalog is read-only for the lifetime of the process. Lookups by slug go
//! through a lazily built index so the renderer and router never scan.

use fnv::FnvHashMap;
use std::sync::OnceLock;

/// One of the three category orbits.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CategoryId {
    Design,
    Tech,
    Business,
}

impl CategoryId {
    /// Orbit order, innermost first.
    pub const ALL: [CategoryId; 3] = [CategoryId::Design, CategoryId::Tech, CategoryId::Business];

    pub fn key(self) -> &'static str {
        match self {
            CategoryId::Design => "design",
            CategoryId::Tech => "tech",
            CategoryId::Business => "business",
        }
    }

    pub fn index(self) -> usize {
        match self {
            CategoryId::Design => 0,
            CategoryId::Tech => 1,
            CategoryId::Business => 2,
        }
    }

    pub fn category(self) -> &'static Category {
        &CATEGORIES[self.index()]
    }
}

#[derive(Debug)]
pub struct Category {
    pub id: CategoryId,
    pub title: &'static str,
    pub desc: &'static str,
    /// `#rrggbb`
    pub color: &'static str,
    pub projects: &'static [Project],
}

#[derive(Debug)]
pub struct Project {
    pub name: &'static str,
    pub subtitle: Option<&'static str>,
    pub summary: &'static str,
    pub slug: &'static str,
    pub problem: &'static str,
    pub outcome: &'static str,
    pub role: &'static str,
    pub process: &'static [&'static str],
    pub impact: &'static str,
    pub link: Option<&'static str>,
}

/// A project together with the category it belongs to.
#[derive(Clone, Copy, Debug)]
pub struct ProjectRef {
    pub project: &'static Project,
    pub category: &'static Category,
}

pub static CATEGORIES: [Category; 3] = [
    Category {
        id: CategoryId::Design,
        title: "DESIGN",
        desc: "Fusing tactile storytelling, branding, and spatial imagination.",
        color: "#ff0055",
        projects: &[
            Project {
                name: "Tag Tracks: Toy Design",
                subtitle: Some("Moose Toys Sponsored"),
                summary: "A diorama-inspired collectible line with story-rich play.",
                slug: "tag-tracks",
                problem: "Children’s collectible toys often lack deeper narrative, tactile interaction, and display value.",
                outcome: "A diorama-inspired collectible toy line with a strong aesthetic identity and modular story tiles.",
                role: "Product Manager & 3D Modeler",
                process: &[
                    "User interviews with children and parents",
                    "Play pattern exploration",
                    "Prototyping with Shapr3D",
                    "Branding, packaging, and visual development",
                    "Market testing across multiple iterations",
                ],
                impact: "Delivered manufacturing-ready prototypes with validated play patterns and shelf presence.",
                link: None,
            },
            Project {
                name: "Business Pitch Projects",
                subtitle: Some("Honda / Google / Meow Wolf / IYA"),
                summary: "Future-facing proposals across mobility, art-tech, and education.",
                slug: "business-pitch-projects",
                problem: "Companies need fresh perspectives to explore future markets and solve emerging problems.",
                outcome: "Concept proposals spanning future mobility, education, healthcare, emergency prevention, and art-tech experiences.",
                role: "Researcher & Graphic/UX Designer",
                process: &[
                    "User research and trend mapping",
                    "Concept design + speculative scenarios",
                    "Wireframes and visual storytelling",
                    "Pitch deck creation for executive reviews",
                ],
                impact: "Contributed to presentations selected for multiple showcase reviews and partner discussions.",
                link: None,
            },
        ],
    },
    Category {
        id: CategoryId::Tech,
        title: "TECHNOLOGY",
        desc: "Full-stack engineering and data visualization for high-stakes systems.",
        color: "#00aaff",
        projects: &[
            Project {
                name: "AI-Powered Disaster Response Mapping System",
                subtitle: Some("AWS × Vanderbilt Hackathon"),
                summary: "Real-time danger mapping for emergency responders.",
                slug: "ai-disaster-response",
                problem: "Emergency responders lack real-time visibility into blocked roads, trapped civilians, and high-risk zones.",
                outcome: "An AI-driven visualization platform mapping danger zones using drone and thermal sensor data.",
                role: "Product Manager & Frontend Developer",
                process: &[
                    "Defined product scope and safety requirements",
                    "Built backend data pipeline in Python",
                    "Designed real-time API architecture",
                    "Developed interactive map UI with React",
                    "Used AWS Amplify for continuous deployment",
                    "Tested with simulated disaster datasets",
                ],
                impact: "Enabled faster, clearer situational understanding for emergency responders.",
                link: None,
            },
            Project {
                name: "Counter-Strike 2 Market Data Visualization",
                subtitle: None,
                summary: "Linking CS2 economy movements to global signals.",
                slug: "cs2-market-visualization",
                problem: "Players lack tooling that shows how CS2 skin prices correlate with real-world trends.",
                outcome: "An interactive dashboard connecting CS2 market data with S&P 500, COVID-19, and Google Trends.",
                role: "Data Analysis Engineer",
                process: &[
                    "Data collection and cleaning",
                    "SQL database design",
                    "HTML/CSS chart development",
                    "User interviews and UI refinement",
                    "Multiple data-visualization iterations",
                ],
                impact: "Helped players understand macro-economic patterns behind market fluctuations.",
                link: None,
            },
        ],
    },
    Category {
        id: CategoryId::Business,
        title: "BUSINESS",
        desc: "Strategy sprints that turn research into scalable programs.",
        color: "#00ffaa",
        projects: &[
            Project {
                name: "Northrop Grumman FabLab Innovation Sprint",
                subtitle: None,
                summary: "A mobile Fab Lab program reaching 1,000+ students.",
                slug: "fablab-innovation-sprint",
                problem: "STEM opportunities remain limited for underrepresented student communities.",
                outcome: "A scalable mobile Fab Lab program delivering hands-on innovation experiences to 1,000+ students.",
                role: "Product Manager",
                process: &[
                    "Field research and community analysis",
                    "Designed mobile lab workflow and curriculum",
                    "Built financial and resource models",
                    "Created deployment and partnership strategy",
                ],
                impact: "Projected 15% ROI through increased outreach efficiency and brand visibility.",
                link: None,
            },
            Project {
                name: "Snyping Game",
                subtitle: Some("Startup Project"),
                summary: "Data-backed concept validation for indie studios.",
                slug: "snyping-game",
                problem: "Indie studios often lack actionable insight into profitable audiences and ad channels.",
                outcome: "A validated product concept supported by market, user, and funnel analysis.",
                role: "Product Manager & Data Analyst",
                process: &[
                    "Market + competitor research",
                    "Designed user flows and product concept",
                    "Built Excel-based traffic and ad performance models",
                    "Identified key channels and audience personas",
                ],
                impact: "Influenced product direction and go-to-market strategy with data-backed recommendations.",
                link: None,
            },
        ],
    },
];

fn slug_index() -> &'static FnvHashMap<&'static str, ProjectRef> {
    static INDEX: OnceLock<FnvHashMap<&'static str, ProjectRef>> = OnceLock::new();
    INDEX.get_or_init(|| {
        let mut map = FnvHashMap::default();
        for entry in all_projects() {
            if map.insert(entry.project.slug, entry).is_some() {
                log::warn!("[catalog] duplicate slug {}", entry.project.slug);
            }
        }
        map
    })
}

/// Find a project by its slug. Unknown slugs yield `None`.
pub fn get_project_by_slug(slug: &str) -> Option<ProjectRef> {
    slug_index().get(slug).copied()
}

/// All projects in orbit order.
pub fn all_projects() -> impl Iterator<Item = ProjectRef> {
    CATEGORIES.iter().flat_map(|category| {
        category
            .projects
            .iter()
            .map(move |project| ProjectRef { project, category })
    })
}
