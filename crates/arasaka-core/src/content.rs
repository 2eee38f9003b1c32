//! Static copy for the gate and the panels.

/// Text typed into the password field on the login gate.
pub const GATE_PASSWORD: &str = "ARASAKA_NEURAL_LINK_AUTHORIZED";

/// Banner lines above the password field.
pub const GATE_BANNER: [&str; 3] = [
    "> ARASAKA SECURITY PROTOCOL ACTIVE",
    "> Neural interface detected...",
    "> Awaiting authorization...",
];

pub const GATE_PROMPT: &str = "[ PRESS ANY KEY TO INITIALIZE ]";
pub const GATE_CONFIRM_PROMPT: &str = "[ PRESS ANY KEY TO CONTINUE ]";

pub const OWNER_NAME: &str = "FILIP PIELECKI";
pub const FOOTER_TEXT: &str = "FILIP PIELECKI © 2077 | PORTFOLIO INSPIRED BY CYBERPUNK";
pub const SYSTEM_NAME: &str = "Arasaka OS v2.1.7";

pub const ABOUT_HEADER: &str = "PERSONNEL PROFILE - FILIP PIELECKI";

pub const ABOUT_BIO: &str = "Computer science graduate with hands-on experience in web development, data analytics, and software development. Passionate about emerging technologies like machine learning and scalable systems, and eager to contribute to innovative projects while expanding expertise.";

pub const PROJECTS_HEADER: &str = "PROJECTS";
pub const PROJECTS_DESCRIPTION: &str = "A collection of projects I have worked on, including web applications and data analysis tools. Even... some cyber security.";

pub const CONTACT_HEADER: &str = "CONTACT PROTOCOL";
pub const CONTACT_DESCRIPTION: &str = "Feel free to get in contact with me, I will look to respond in record time of less than 24 hours... But times may vary across the year.";

pub const LINKS_HEADER: &str = "LINKS DIRECTORY";
pub const LINKS_DESCRIPTION: &str = "External nodes registered to this operative. Follow a link to leave the Arasaka network.";

/// An entry in the tech stack grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub category: &'static str,
}

/// A job in the employment history.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Experience {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub clearance: &'static str,
    pub duties: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Education {
    pub degree: &'static str,
    pub institution: &'static str,
    pub results: Option<&'static str>,
    pub year: &'static str,
}

/// An external profile link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContactLink {
    pub label: &'static str,
    pub value: &'static str,
    pub description: &'static str,
    pub url: &'static str,
}

pub const SKILLS: &[Skill] = &[
    Skill { name: "Python", category: "Main Language" },
    Skill { name: "Windows", category: "Main OS" },
    Skill { name: "Typescript", category: "Commonly Used" },
    Skill { name: "Java", category: "Experienced Language" },
    Skill { name: "Linux", category: "Learning OS" },
    Skill { name: "MacOS", category: "Experienced OS" },
    Skill { name: "Git", category: "Experienced" },
];

pub const EXPERIENCE: &[Experience] = &[
    Experience {
        title: "Global Technical Integration Assistant",
        company: "Awin",
        period: "2023 - 2024",
        clearance: "Affiliate Marketing",
        duties: &[
            "Expertise in sales attribution systems (server-to-server tracking, Moonpull, Awin).",
            "Proficient with Asana, Salesforce, and Jira for efficient project and task management.",
            "Integrated XML/CSV product feeds and configured 35+ client accounts monthly.",
            "Supported 50+ clients with fast troubleshooting and tailored solutions.",
            "Created Polish-language documentation and onboarding guides, improving accessibility and training.",
        ],
    },
    Experience {
        title: "Graphic Design Assistant",
        company: "Audiografix",
        period: "2020",
        clearance: "Graphic Web Design",
        duties: &[
            "Created 20+ website and logo sketches using Illustrator and Photoshop.",
            "Collaborated with teams to refine 10+ final designs.",
            "Researched industry trends to enhance design quality.",
        ],
    },
    Experience {
        title: "Data Entry",
        company: "ETB Management",
        period: "August 2018",
        clearance: "Estate Agency",
        duties: &[
            "Updated data for 500+ properties in Excel, improving accuracy and reporting efficiency.",
            "Tracked potential properties from online portals under strict criteria.",
            "Ensured confidentiality and compliance when handling sensitive data.",
        ],
    },
];

pub const EDUCATION: &[Education] = &[
    Education {
        degree: "Bachelor of Science in Computer Science with Year In Industry",
        institution: "University of Leicester",
        results: Some("First Class Honours"),
        year: "2021-2025",
    },
    Education {
        degree: "Computer Science, Mathematics and Economics",
        institution: "Fortismere",
        results: None,
        year: "2019-2021",
    },
];

pub const CONTACT_LINKS: &[ContactLink] = &[
    ContactLink {
        label: "GitHub",
        value: "github.com/FP2003",
        description: "View my repositories",
        url: "https://github.com/FP2003",
    },
    ContactLink {
        label: "LinkedIn",
        value: "linkedin.com/in/filip-pielecki",
        description: "Professional network",
        url: "https://linkedin.com/in/filip-pielecki",
    },
    ContactLink {
        label: "LeetCode",
        value: "leetcode.com/u/FP2003",
        description: "Coding challenges & solutions",
        url: "https://leetcode.com/u/FP2003",
    },
];

/// Label/value pairs in the "system specifications" grid.
pub const SYSTEM_SPECS: &[(&str, &str)] = &[
    ("University Peer Mentor", "Accredited"),
    ("Network Access", "Github, Gitlab"),
    ("Code Quality", "Following PEP8!"),
    ("Languages", "Polish, English, Spanish (Basics)"),
];
