//! Static page content.

pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    /// Accent color of the skill badge.
    pub color: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Next.js", level: 95, color: "#ffffff" },
    Skill { name: "React", level: 93, color: "#22d3ee" },
    Skill { name: "Node.js", level: 90, color: "#22c55e" },
    Skill { name: "TypeScript", level: 92, color: "#3b82f6" },
    Skill { name: "Tailwind CSS", level: 95, color: "#22d3ee" },
    Skill { name: "Laravel", level: 88, color: "#ef4444" },
    Skill { name: "PostgreSQL", level: 92, color: "#60a5fa" },
    Skill { name: "MariaDB", level: 90, color: "#2563eb" },
    Skill { name: "WordPress", level: 85, color: "#3b82f6" },
    Skill { name: "PHP", level: 88, color: "#a855f7" },
    Skill { name: "JavaScript", level: 94, color: "#facc15" },
    Skill { name: "MySQL", level: 90, color: "#3b82f6" },
];

pub struct Project {
    pub title: &'static str,
    pub desc: &'static str,
    /// Comma separated.
    pub tech: &'static str,
    /// Empty when the project has no public address.
    pub url: &'static str,
    pub kind: &'static str,
    pub image: &'static str,
}

impl Project {
    pub fn tech_tags(&self) -> impl Iterator<Item = &'static str> {
        self.tech.split(',').map(str::trim).filter(|t| !t.is_empty())
    }
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Ambience Infosys",
        desc: "IT Company Website with modern design and service showcase",
        tech: "Next.js, Tailwind CSS, Node.js",
        url: "https://ambienceinfosys.com.np/",
        kind: "Corporate Website",
        image: "/Ambience.png",
    },
    Project {
        title: "Kansai Japanese Language",
        desc: "Japanese Language Institute platform with course management",
        tech: "Laravel, MariaDB, Tailwind CSS",
        url: "https://kansaijapaneselanguage.com.np/",
        kind: "Educational Platform",
        image: "/Kansai.png",
    },
    Project {
        title: "Rakmina Consultancy",
        desc: "Multi-language consultancy platform for abroad opportunities",
        tech: "Laravel, PostgreSQL, Multi-language",
        url: "https://rakmina.nirc.com.np/",
        kind: "Consultancy System",
        image: "/Rakmina.png",
    },
    Project {
        title: "Lucazsoft POS",
        desc: "Fully-featured Restaurant POS system with inventory management",
        tech: "Laravel, MariaDB, Node.js",
        url: "https://lucazsoft.com/login",
        kind: "POS System",
        image: "/Lucaz.png",
    },
    Project {
        title: "GWP Government Portal",
        desc: "Government web portal managing all government-related work",
        tech: "Laravel, PostgreSQL, Tailwind CSS",
        url: "",
        kind: "Government Portal",
        image: "/placeholder.svg",
    },
    Project {
        title: "Sam Maharjan Portfolio",
        desc: "Personal portfolio website with modern 3D design",
        tech: "Next.js, Tailwind CSS, Framer Motion",
        url: "https://sammaharjan.com.np/home/",
        kind: "Portfolio Website",
        image: "/Sam.png",
    },
];

pub struct Experience {
    pub period: &'static str,
    pub role: &'static str,
    pub company: &'static str,
    pub desc: &'static str,
    pub achievements: &'static [&'static str],
}

pub const EXPERIENCES: &[Experience] = &[Experience {
    period: "2024 - Present",
    role: "Full-Stack Developer",
    company: "NIRC Nepal (Incubation And Research Center)",
    desc: "Developing enterprise applications using React, Node.js, Python Django, Grails, HTML, CSS, and JavaScript. Delivering 6+ major projects including government portals, POS systems, and multi-language platforms.",
    achievements: &[
        "Delivered 6+ major projects with high quality standards",
        "Built scalable POS systems for restaurant management",
        "Developed multi-language platforms supporting 5+ languages",
        "Improved application performance by 40% through optimization",
        "Implemented CI/CD pipelines reducing deployment time by 60%",
        "Created reusable component libraries and design systems",
    ],
}];

pub struct Education {
    pub period: &'static str,
    pub degree: &'static str,
    pub school: &'static str,
    pub desc: &'static str,
}

pub const EDUCATION: &[Education] = &[Education {
    period: "2020 - 2025",
    degree: "Bachelor in Computer Application",
    school: "Tribhuvan University",
    desc: "Completed comprehensive computer science education with focus on software development, database management, and web technologies.",
}];

pub struct Service {
    pub title: &'static str,
    pub desc: &'static str,
    pub points: [&'static str; 3],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Web Development",
        desc: "Full-stack web applications using Next.js, React, Laravel, and modern technologies",
        points: ["Responsive Design", "API Integration", "Database Design"],
    },
    Service {
        title: "Backend Systems",
        desc: "Scalable backend solutions with Node.js, Laravel, and database optimization",
        points: ["RESTful APIs", "Authentication", "Performance Tuning"],
    },
    Service {
        title: "UI/UX Design",
        desc: "Creating intuitive and visually appealing user interfaces with modern design principles",
        points: ["Responsive Design", "User Experience", "Prototyping"],
    },
];

pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

pub const STATS: &[Stat] = &[
    Stat { value: "6+", label: "Major Projects", color: "#34d399" },
    Stat { value: "1+", label: "Year Experience", color: "#60a5fa" },
    Stat { value: "100%", label: "Client Satisfaction", color: "#c084fc" },
    Stat { value: "12+", label: "Technologies", color: "#f472b6" },
];

/// About section highlight cards: (title, text).
pub const ABOUT_CARDS: [(&str, &str); 2] = [
    ("Experience", "1 year building enterprise applications with modern tech stack"),
    ("Projects", "6+ major projects including government portals and POS systems"),
];

pub const HERO_INTRO: &str = "Full-stack developer at NIRC Nepal specializing in React, Node.js, Python Django, Grails, HTML, CSS, and JavaScript. Delivering enterprise solutions including government portals, POS systems, and multi-language platforms. 1 year of experience with 6+ major projects deployed and maintained.";

/// Social links shown in the sidebar: (label, url).
pub const SOCIAL_LINKS: [(&str, &str); 4] = [
    ("Instagram", "#"),
    ("LinkedIn", "#"),
    ("GitHub", "#"),
    ("Twitter", "#"),
];

// ── Résumé ───────────────────────────────────────────────────────────

pub struct SkillCategory {
    pub title: &'static str,
    pub level: &'static str,
    pub skills: &'static [&'static str],
}

pub struct ResumeProject {
    pub title: &'static str,
    pub desc: &'static str,
    pub tech: &'static str,
    pub impact: &'static str,
}

pub const RESUME_SUMMARY: &str = "Full-Stack Developer with 1 year of expertise in modern web technologies including React, Node.js, Python Django, Grails, HTML, CSS, and JavaScript. Delivering enterprise solutions including government portals, POS systems, and multi-language platforms.";

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Frontend Development",
        level: "Expert",
        skills: &["Next.js", "React", "TypeScript", "Tailwind CSS", "JavaScript"],
    },
    SkillCategory {
        title: "Backend Development",
        level: "Advanced",
        skills: &["Node.js", "Laravel", "PHP", "RESTful APIs", "GraphQL"],
    },
    SkillCategory {
        title: "Database Management",
        level: "Expert",
        skills: &["PostgreSQL", "MariaDB", "MySQL", "Database Design"],
    },
    SkillCategory {
        title: "DevOps & Tools",
        level: "Intermediate",
        skills: &["Git", "Docker", "AWS", "CI/CD", "Linux"],
    },
];

pub const RESUME_PROJECTS: &[ResumeProject] = &[
    ResumeProject {
        title: "Ambience Infosys Corporate Website",
        desc: "Modern IT company website with service showcase, client testimonials, and contact management system.",
        tech: "Next.js, Tailwind CSS, Node.js, PostgreSQL",
        impact: "Increased client inquiries by 150%",
    },
    ResumeProject {
        title: "Kansai Japanese Language Institute",
        desc: "Educational platform with course management, student enrollment, and progress tracking system.",
        tech: "Laravel, MariaDB, Tailwind CSS, JavaScript",
        impact: "Streamlined course management for 500+ students",
    },
    ResumeProject {
        title: "Rakmina Consultancy Multi-language Platform",
        desc: "Comprehensive consultancy platform supporting multiple languages for international opportunities.",
        tech: "Laravel, PostgreSQL, Multi-language Support",
        impact: "Expanded reach to 10+ countries",
    },
    ResumeProject {
        title: "Lucazsoft Restaurant POS System",
        desc: "Complete restaurant management system with inventory, sales tracking, and reporting features.",
        tech: "Laravel, MariaDB, Node.js, Real-time Updates",
        impact: "Reduced order processing time by 70%",
    },
    ResumeProject {
        title: "GWP Government Portal",
        desc: "Comprehensive government web portal managing all government-related services and information.",
        tech: "Laravel, PostgreSQL, Tailwind CSS, Security",
        impact: "Digitized 50+ government services",
    },
];

pub const CERTIFICATIONS: &[&str] = &[
    "Bachelor of Computer Applications (BCA) - Ongoing",
    "Advanced Web Development Certification",
    "Database Management Systems Certification",
    "Agile Project Management Certification",
];
