//! Static page content.
//!
//! DESIGN
//! ======
//! Everything the page says lives here as `'static` literals so components
//! stay purely presentational and the content invariants (unique titles,
//! percentages in range, anchors that resolve) can be checked in tests.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Glyph used in place of an icon font.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    Brain,
    Server,
    Monitor,
    Code,
    Cloud,
    Database,
    Chart,
    Bolt,
    Rocket,
    Github,
    Linkedin,
    Mail,
}

impl Icon {
    #[must_use]
    pub fn glyph(self) -> &'static str {
        match self {
            Self::Brain => "◈",
            Self::Server => "▤",
            Self::Monitor => "▭",
            Self::Code => "</>",
            Self::Cloud => "☁",
            Self::Database => "⛁",
            Self::Chart => "▥",
            Self::Bolt => "⚡",
            Self::Rocket => "➶",
            Self::Github => "⌥",
            Self::Linkedin => "in",
            Self::Mail => "✉",
        }
    }
}

// =============================================================
// Profile
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Profile {
    pub first_name: &'static str,
    pub last_name: &'static str,
    pub monogram: &'static str,
    pub headline: &'static str,
    pub education: &'static str,
    pub location: &'static str,
    pub resume_href: &'static str,
}

pub const PROFILE: Profile = Profile {
    first_name: "Sanjay",
    last_name: "Krishna K",
    monogram: "SK",
    headline: "Agentic AI & ML Engineer",
    education: "BE Computer Science Engineering – 2nd Year | SKCET",
    location: "Tamil Nadu, India",
    resume_href: "/resume.pdf",
};

// =============================================================
// Navigation
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    /// Fragment (`#id`) of the target section.
    pub href: &'static str,
}

pub const NAV_LINKS: &[NavLink] = &[
    NavLink { label: "About", href: "#about" },
    NavLink { label: "Skills", href: "#skills" },
    NavLink { label: "AI/ML", href: "#ai-ml-projects" },
    NavLink { label: "Platforms", href: "#platforms" },
    NavLink { label: "Vision", href: "#vision" },
    NavLink { label: "Contact", href: "#contact" },
];

/// Every section id rendered on the page, in page order.
pub const SECTION_IDS: &[&str] = &[
    "hero",
    "about",
    "skills",
    "ai-ml-projects",
    "platforms",
    "vision",
    "contact-form",
    "contact",
];

// =============================================================
// Hero
// =============================================================

pub const ROLES: &[&str] = &["Agentic AI Engineer", "ML Engineer", "Full Stack Developer", "Cloud Architect"];

pub const TAGLINE: &str = "Building systems that think, learn, adapt, and scale.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Stat {
    pub target: u32,
    pub suffix: &'static str,
    pub label: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { target: 20, suffix: "+", label: "Projects Built" },
    Stat { target: 12, suffix: "", label: "AI/ML Systems" },
    Stat { target: 8, suffix: "", label: "Platforms" },
];

// =============================================================
// About / Vision
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PipelineStep {
    pub label: &'static str,
    pub icon: Icon,
}

pub const ABOUT_PIPELINE: &[PipelineStep] = &[
    PipelineStep { label: "Data", icon: Icon::Chart },
    PipelineStep { label: "Intelligence", icon: Icon::Brain },
    PipelineStep { label: "Automation", icon: Icon::Bolt },
    PipelineStep { label: "Impact", icon: Icon::Rocket },
];

pub const DRIVERS: &[&str] = &[
    "AI systems that make decisions, not just predictions",
    "Backends that remain clean and stable under scale",
    "Cloud-native architectures designed for growth",
    "Intelligence layers that integrate seamlessly with real-world applications",
];

pub const VISION_PILLARS: &[PipelineStep] = &[
    PipelineStep { label: "Data flows seamlessly", icon: Icon::Database },
    PipelineStep { label: "Intelligence drives decisions", icon: Icon::Brain },
    PipelineStep { label: "Automation reduces friction", icon: Icon::Bolt },
    PipelineStep { label: "Architecture enables scale", icon: Icon::Rocket },
];

// =============================================================
// Skills
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    /// Proficiency percentage, `0..=100`.
    pub level: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SkillTab {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
    pub badges: &'static [&'static str],
    pub skills: &'static [Skill],
}

pub const SKILL_TABS: &[SkillTab] = &[
    SkillTab {
        id: "ai",
        label: "AI & ML",
        icon: Icon::Brain,
        badges: &["TensorFlow", "Scikit-learn", "NLP", "Pandas", "NumPy"],
        skills: &[
            Skill { name: "Predictive Modeling & Scoring", level: 90 },
            Skill { name: "NLP & Sentiment Analysis", level: 85 },
            Skill { name: "Fraud & Anomaly Detection", level: 80 },
            Skill { name: "Recommendation Systems", level: 75 },
            Skill { name: "Monte Carlo Simulations", level: 70 },
            Skill { name: "Performance Forecasting", level: 85 },
        ],
    },
    SkillTab {
        id: "backend",
        label: "Backend",
        icon: Icon::Server,
        badges: &["FastAPI", "Django REST", "Spring Boot"],
        skills: &[
            Skill { name: "RESTful API Architecture", level: 92 },
            Skill { name: "JWT Auth & RBAC", level: 88 },
            Skill { name: "Middleware Engineering", level: 80 },
            Skill { name: "WebSockets / Real-Time", level: 78 },
            Skill { name: "Database Design", level: 85 },
            Skill { name: "API Rate Limiting", level: 75 },
        ],
    },
    SkillTab {
        id: "frontend",
        label: "Frontend",
        icon: Icon::Monitor,
        badges: &["React + Vite", "Angular", "Streamlit"],
        skills: &[
            Skill { name: "React Component Architecture", level: 90 },
            Skill { name: "Interactive Data Visualization", level: 82 },
            Skill { name: "State Management", level: 85 },
            Skill { name: "Analytics Dashboards", level: 80 },
            Skill { name: "Responsive Design", level: 88 },
        ],
    },
    SkillTab {
        id: "languages",
        label: "Languages",
        icon: Icon::Code,
        badges: &["Python", "Java", "C++", "JavaScript", "TypeScript"],
        skills: &[
            Skill { name: "Python", level: 95 },
            Skill { name: "Java", level: 85 },
            Skill { name: "JavaScript / TypeScript", level: 88 },
            Skill { name: "C++", level: 72 },
        ],
    },
    SkillTab {
        id: "cloud",
        label: "Cloud",
        icon: Icon::Cloud,
        badges: &["Docker", "AWS", "CI/CD", "Git"],
        skills: &[
            Skill { name: "Docker Containerization", level: 82 },
            Skill { name: "AWS (EC2, S3, RDS)", level: 70 },
            Skill { name: "CI/CD & Git Workflows", level: 80 },
            Skill { name: "Cloud Deployment", level: 75 },
        ],
    },
    SkillTab {
        id: "data",
        label: "Data",
        icon: Icon::Database,
        badges: &["PostgreSQL", "MongoDB", "Redis", "Postman"],
        skills: &[
            Skill { name: "PostgreSQL / MongoDB", level: 85 },
            Skill { name: "Redis Caching", level: 72 },
            Skill { name: "API Testing (Postman)", level: 88 },
            Skill { name: "Data Pipeline Architecture", level: 78 },
        ],
    },
];

// =============================================================
// Projects
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tags: &'static [&'static str],
    pub tech: &'static [&'static str],
}

/// Accent color family of a project section.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Accent {
    Orange,
    Ember,
}

impl Accent {
    /// CSS class modifier, e.g. `project-card--orange`.
    #[must_use]
    pub fn modifier(self) -> &'static str {
        match self {
            Self::Orange => "orange",
            Self::Ember => "ember",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProjectGroup {
    pub id: &'static str,
    pub label: &'static str,
    pub sublabel: &'static str,
    pub accent: Accent,
    pub projects: &'static [Project],
}

pub const AI_ML_PROJECTS: &[Project] = &[
    Project {
        title: "AI Placement Readiness & Skill Gap Intelligence Platform",
        description: "Predicts placement readiness (0–100) with personalized improvement roadmaps.",
        tags: &["ML", "Analytics"],
        tech: &["Python", "Scikit-learn", "FastAPI", "React"],
    },
    Project {
        title: "AI Resume Intelligence & Job Matching Engine",
        description: "Resume-to-job similarity scoring with automated skill extraction.",
        tags: &["NLP", "Matching"],
        tech: &["Python", "NLP", "FastAPI", "Streamlit"],
    },
    Project {
        title: "AI Interview Simulator with Behavioral Analysis",
        description: "NLP-based confidence scoring and performance analytics.",
        tags: &["NLP", "Simulation"],
        tech: &["Python", "TensorFlow", "FastAPI", "React"],
    },
    Project {
        title: "AI Financial Fraud Detection System",
        description: "Anomaly detection with fraud probability scoring.",
        tags: &["Fraud Detection", "ML"],
        tech: &["Python", "Scikit-learn", "Django", "React"],
    },
    Project {
        title: "AI Academic Performance Prediction System",
        description: "Semester forecasting using behavioral and academic modeling.",
        tags: &["Prediction", "Education"],
        tech: &["Python", "Pandas", "FastAPI", "Streamlit"],
    },
    Project {
        title: "AI Code Quality & Bug Risk Analyzer",
        description: "Risk heatmaps and bug-prone module detection.",
        tags: &["Code Analysis", "Risk"],
        tech: &["Python", "AST", "FastAPI", "React + Vite"],
    },
    Project {
        title: "AI Health Risk Prediction Dashboard",
        description: "Disease risk modeling with trend tracking.",
        tags: &["Healthcare", "ML"],
        tech: &["Python", "Scikit-learn", "Django", "Angular"],
    },
    Project {
        title: "AI Startup Idea Risk Analyzer",
        description: "Market similarity scoring with SWOT intelligence.",
        tags: &["Business", "Risk"],
        tech: &["Python", "NLP", "FastAPI", "React"],
    },
    Project {
        title: "AI Personalized News Recommendation System",
        description: "Collaborative filtering with engagement analytics.",
        tags: &["RecSys", "NLP"],
        tech: &["Python", "TensorFlow", "Django REST", "React"],
    },
    Project {
        title: "AI Attendance Dropout Prediction System",
        description: "Department-level dropout risk dashboards.",
        tags: &["Prediction", "Education"],
        tech: &["Python", "Pandas", "Spring Boot", "Angular"],
    },
    Project {
        title: "AI Portfolio Optimization & Risk Simulator",
        description: "Monte Carlo simulations for optimized asset allocation.",
        tags: &["Finance", "Monte Carlo"],
        tech: &["Python", "NumPy", "FastAPI", "Streamlit"],
    },
    Project {
        title: "AI Campus Complaint Sentiment Analyzer",
        description: "Sentiment clustering with priority prediction.",
        tags: &["NLP", "Sentiment"],
        tech: &["Python", "NLTK", "Django", "React + Vite"],
    },
];

pub const PLATFORM_PROJECTS: &[Project] = &[
    Project {
        title: "Distributed Task Management Platform",
        description: "Multi-org Kanban system with RBAC and activity logging.",
        tags: &["Kanban", "RBAC"],
        tech: &["Java", "Spring Boot", "React", "PostgreSQL"],
    },
    Project {
        title: "Real-Time Collaborative Notes App",
        description: "Live editing via WebSockets with sync and versioning.",
        tags: &["WebSockets", "Real-Time"],
        tech: &["JavaScript", "FastAPI", "React + Vite", "Redis"],
    },
    Project {
        title: "Event Ticket Booking System",
        description: "Real-time seat locking with lifecycle management.",
        tags: &["Booking", "Real-Time"],
        tech: &["Java", "Spring Boot", "Angular", "PostgreSQL"],
    },
    Project {
        title: "API Rate Limiting Dashboard",
        description: "Custom middleware API usage tracking.",
        tags: &["API", "Middleware"],
        tech: &["Python", "FastAPI", "React", "Redis"],
    },
    Project {
        title: "Expense Analytics & Budget Tracker",
        description: "Financial trend visualization and overspending detection.",
        tags: &["Finance", "Analytics"],
        tech: &["Python", "Django", "React + Vite", "PostgreSQL"],
    },
    Project {
        title: "Smart Campus Complaint System",
        description: "Automated escalation with resolution analytics.",
        tags: &["Automation", "Campus"],
        tech: &["Java", "Spring Boot", "Angular", "MySQL"],
    },
    Project {
        title: "SaaS Subscription Billing Platform",
        description: "Usage-based billing with invoice tracking.",
        tags: &["SaaS", "Billing"],
        tech: &["Python", "Django REST", "React", "PostgreSQL"],
    },
    Project {
        title: "Academic Resource Exchange Platform",
        description: "Full-text search with contributor ranking.",
        tags: &["Education", "Search"],
        tech: &["JavaScript", "FastAPI", "React + Vite", "MongoDB"],
    },
];

pub const PROJECT_GROUPS: &[ProjectGroup] = &[
    ProjectGroup {
        id: "ai-ml-projects",
        label: "AI & ML Projects",
        sublabel: "Intelligent AI/ML Systems",
        accent: Accent::Orange,
        projects: AI_ML_PROJECTS,
    },
    ProjectGroup {
        id: "platforms",
        label: "Scalable Platforms",
        sublabel: "Full-Stack Platforms",
        accent: Accent::Ember,
        projects: PLATFORM_PROJECTS,
    },
];

// =============================================================
// Contact
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub href: &'static str,
    pub tag: &'static str,
    pub icon: Icon,
    /// Open in a new tab.
    pub external: bool,
}

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "GitHub",
        href: "https://github.com/sanjaykrishna247",
        tag: "@sanjaykrishna247",
        icon: Icon::Github,
        external: true,
    },
    ContactLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/sanjaykrishna-k",
        tag: "sanjaykrishna-k",
        icon: Icon::Linkedin,
        external: true,
    },
    ContactLink {
        label: "Email",
        href: "mailto:sanjaykrishna.k.07@gmail.com",
        tag: "sanjaykrishna.k.07@gmail.com",
        icon: Icon::Mail,
        external: false,
    },
];
