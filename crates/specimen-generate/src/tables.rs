//! Reference data backing the generators.
//!
//! Everything here is constant after load; keys are stable identifiers the
//! generators look up at call time.

/// Country entry with its international dialing code.
#[derive(Debug, Clone, Copy)]
pub struct Country {
    pub code: &'static str,
    pub name: &'static str,
    pub dialing: &'static str,
}

// The first entry is the US fallback used when a country code is unknown.
pub const COUNTRIES: &[Country] = &[
    Country { code: "US", name: "United States", dialing: "+1" },
    Country { code: "GB", name: "United Kingdom", dialing: "+44" },
    Country { code: "IN", name: "India", dialing: "+91" },
    Country { code: "DE", name: "Germany", dialing: "+49" },
    Country { code: "FR", name: "France", dialing: "+33" },
    Country { code: "CA", name: "Canada", dialing: "+1" },
    Country { code: "AU", name: "Australia", dialing: "+61" },
    Country { code: "JP", name: "Japan", dialing: "+81" },
    Country { code: "BR", name: "Brazil", dialing: "+55" },
    Country { code: "IT", name: "Italy", dialing: "+39" },
    Country { code: "ES", name: "Spain", dialing: "+34" },
    Country { code: "MX", name: "Mexico", dialing: "+52" },
    Country { code: "KR", name: "South Korea", dialing: "+82" },
    Country { code: "CN", name: "China", dialing: "+86" },
    Country { code: "RU", name: "Russia", dialing: "+7" },
    Country { code: "NL", name: "Netherlands", dialing: "+31" },
    Country { code: "SE", name: "Sweden", dialing: "+46" },
    Country { code: "NO", name: "Norway", dialing: "+47" },
    Country { code: "DK", name: "Denmark", dialing: "+45" },
    Country { code: "FI", name: "Finland", dialing: "+358" },
    Country { code: "CH", name: "Switzerland", dialing: "+41" },
    Country { code: "AT", name: "Austria", dialing: "+43" },
    Country { code: "BE", name: "Belgium", dialing: "+32" },
    Country { code: "PT", name: "Portugal", dialing: "+351" },
    Country { code: "PL", name: "Poland", dialing: "+48" },
    Country { code: "CZ", name: "Czech Republic", dialing: "+420" },
    Country { code: "HU", name: "Hungary", dialing: "+36" },
    Country { code: "GR", name: "Greece", dialing: "+30" },
    Country { code: "TR", name: "Turkey", dialing: "+90" },
    Country { code: "ZA", name: "South Africa", dialing: "+27" },
    Country { code: "NZ", name: "New Zealand", dialing: "+64" },
    Country { code: "SG", name: "Singapore", dialing: "+65" },
    Country { code: "HK", name: "Hong Kong", dialing: "+852" },
    Country { code: "AE", name: "UAE", dialing: "+971" },
    Country { code: "SA", name: "Saudi Arabia", dialing: "+966" },
    Country { code: "IL", name: "Israel", dialing: "+972" },
    Country { code: "TH", name: "Thailand", dialing: "+66" },
    Country { code: "VN", name: "Vietnam", dialing: "+84" },
    Country { code: "PH", name: "Philippines", dialing: "+63" },
    Country { code: "ID", name: "Indonesia", dialing: "+62" },
    Country { code: "MY", name: "Malaysia", dialing: "+60" },
    Country { code: "AR", name: "Argentina", dialing: "+54" },
    Country { code: "CL", name: "Chile", dialing: "+56" },
    Country { code: "CO", name: "Colombia", dialing: "+57" },
    Country { code: "PE", name: "Peru", dialing: "+51" },
    Country { code: "EG", name: "Egypt", dialing: "+20" },
    Country { code: "NG", name: "Nigeria", dialing: "+234" },
    Country { code: "KE", name: "Kenya", dialing: "+254" },
    Country { code: "MA", name: "Morocco", dialing: "+212" },
];

pub fn country(code: &str) -> Option<&'static Country> {
    COUNTRIES.iter().find(|country| country.code == code)
}

/// Two-digit reporting-body prefix of the Type Allocation Code per brand.
#[derive(Debug, Clone, Copy)]
pub struct ImeiBrand {
    pub name: &'static str,
    pub tac: &'static str,
}

pub const IMEI_BRANDS: &[ImeiBrand] = &[
    ImeiBrand { name: "Apple", tac: "35" },
    ImeiBrand { name: "Samsung", tac: "49" },
    ImeiBrand { name: "Google", tac: "49" },
    ImeiBrand { name: "Huawei", tac: "86" },
    ImeiBrand { name: "Xiaomi", tac: "86" },
    ImeiBrand { name: "OnePlus", tac: "86" },
    ImeiBrand { name: "Sony", tac: "35" },
    ImeiBrand { name: "LG", tac: "35" },
    ImeiBrand { name: "Motorola", tac: "35" },
    ImeiBrand { name: "Nokia", tac: "35" },
];

pub fn imei_tac(brand: &str) -> Option<&'static str> {
    IMEI_BRANDS
        .iter()
        .find(|entry| entry.name == brand)
        .map(|entry| entry.tac)
}

/// Issuer prefix of a card brand; Mastercard's is drawn fresh per call.
#[derive(Debug, Clone, Copy)]
pub enum CardPrefix {
    Fixed(&'static str),
    Range(u32, u32),
}

#[derive(Debug, Clone, Copy)]
pub struct CardBrand {
    pub name: &'static str,
    pub prefix: CardPrefix,
    pub length: usize,
}

// The first entry is the Visa fallback used when a brand name is unknown.
pub const CARD_BRANDS: &[CardBrand] = &[
    CardBrand { name: "Visa", prefix: CardPrefix::Fixed("4"), length: 16 },
    CardBrand { name: "Mastercard", prefix: CardPrefix::Range(51, 55), length: 16 },
    CardBrand { name: "American Express", prefix: CardPrefix::Fixed("37"), length: 15 },
    CardBrand { name: "Discover", prefix: CardPrefix::Fixed("6011"), length: 16 },
    CardBrand { name: "JCB", prefix: CardPrefix::Fixed("3528"), length: 16 },
    CardBrand { name: "Diners Club", prefix: CardPrefix::Fixed("36"), length: 14 },
    CardBrand { name: "UnionPay", prefix: CardPrefix::Fixed("62"), length: 16 },
];

pub fn card_brand(name: &str) -> Option<&'static CardBrand> {
    CARD_BRANDS.iter().find(|brand| brand.name == name)
}

pub const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Charles", "Karen", "Emma", "Olivia", "Ava", "Isabella", "Sophia", "Mia", "Charlotte",
    "Amelia", "Harper", "Evelyn", "Liam", "Noah", "Oliver", "Elijah",
];

pub const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin",
];

pub const USERNAME_NAMES: &[&str] = &[
    "alex", "sam", "jordan", "taylor", "morgan", "riley", "jamie", "quinn", "casey", "dakota",
    "avery", "skyler", "dylan", "tanner", "emma", "olivia", "ava", "isabella", "sophia", "mia",
    "charlotte", "amelia", "harper", "evelyn", "liam", "noah", "oliver", "elijah", "james",
    "william", "benjamin",
];

pub const USERNAME_ADJECTIVES: &[&str] = &[
    "cool", "happy", "sunny", "lucky", "smart", "swift", "bright", "wild", "funny", "nice",
    "epic", "super", "mega", "ultra", "hyper", "active", "chill", "fresh", "big", "small", "fast",
    "slow", "young", "great", "prime", "pro", "max", "ace",
];

pub const USERNAME_NOUNS: &[&str] = &[
    "cat", "dog", "wolf", "shark", "lion", "bear", "fox", "hawk", "eagle", "panda", "koala",
    "puppy", "kitten", "bunny", "duck", "bird", "fish", "unicorn", "dragon", "ninja", "coder",
    "geek", "hero", "star", "moon", "sun", "wave", "fire", "ice", "storm", "king", "queen",
    "prince", "lord", "lady",
];

pub const FREE_MAIL_DOMAINS: &[&str] = &["gmail.com", "yahoo.com", "outlook.com"];

pub const JOB_TITLES: &[&str] = &[
    "Software Engineer",
    "Senior Software Engineer",
    "Staff Engineer",
    "Principal Engineer",
    "Full Stack Developer",
    "Frontend Developer",
    "Backend Developer",
    "Mobile Developer",
    "DevOps Engineer",
    "Site Reliability Engineer",
    "Cloud Engineer",
    "Platform Engineer",
    "Data Engineer",
    "Machine Learning Engineer",
    "AI Engineer",
    "Data Scientist",
    "Cloud Architect",
    "Solutions Architect",
    "Technical Architect",
    "Engineering Manager",
    "Director of Engineering",
    "VP of Engineering",
    "CTO",
    "UI Designer",
    "UX Designer",
    "Product Designer",
    "Visual Designer",
    "Creative Director",
    "Art Director",
    "Product Manager",
    "Senior Product Manager",
    "Director of Product",
    "VP of Product",
    "Project Manager",
    "Senior Project Manager",
    "Program Manager",
    "Scrum Master",
    "Data Analyst",
    "Senior Data Analyst",
    "Analytics Engineer",
    "BI Developer",
    "System Administrator",
    "Network Engineer",
    "Security Engineer",
    "Penetration Tester",
    "SOC Analyst",
    "DevSecOps Engineer",
    "QA Engineer",
    "QA Automation Engineer",
    "Test Engineer",
    "Technical Writer",
    "Documentation Engineer",
    "Customer Success Engineer",
    "Support Engineer",
    "Sales Engineer",
    "Recruiter",
    "Technical Recruiter",
    "HR Manager",
    "Marketing Manager",
    "Digital Marketing Manager",
    "SEO Specialist",
];

pub const COMPANY_SUFFIXES: &[&str] = &[
    "Inc", "Corp", "LLC", "Ltd", "Group", "Solutions", "Systems", "Tech", "Labs", "Ventures",
    "Holdings", "Enterprises", "Co", "Partners", "Associates",
];

pub const US_STREETS: &[&str] = &[
    "Main St", "Oak Ave", "Park Blvd", "First St", "Second St", "Elm St", "Maple Dr", "Cedar Ln",
    "Pine St", "Elmwood Ave", "Washington St", "Lake Dr", "Hill Rd", "River Rd", "Forest Ave",
    "Broadway", "Market St", "Church St", "School Ave", "Mill Rd",
];

pub const UK_STREETS: &[&str] = &[
    "High Street", "Station Road", "London Road", "Victoria Road", "Church Lane", "Manor Road",
    "Park Road", "Queens Road", "Kings Road", "Church Street", "Main Road", "River Close",
    "Hill View", "Station Lane", "Park Lane",
];

pub const DE_STREETS: &[&str] = &[
    "Hauptstraße", "Bahnhofstraße", "Schulstraße", "Gartenstraße", "Dorfstraße", "Bergstraße",
    "Waldstraße", "Kirchstraße", "Lindenstraße", "Brunnenstraße", "Schloßstraße",
    "Friedrichstraße", "Bismarckstraße", "Goethestraße", "Schillerstraße",
];

pub const FR_STREETS: &[&str] = &[
    "Rue de la Paix", "Avenue des Champs-Élysées", "Boulevard Saint-Michel",
    "Place de la République", "Rue Victor Hugo", "Rue du Commerce", "Avenue Jean Jaurès",
    "Rue de la Gare", "Place du Marché", "Avenue de la Libération",
];

pub const UK_CITIES: &[&str] = &["London", "Manchester", "Birmingham"];

pub const UK_POSTCODE_DISTRICTS: &[&str] = &["SW1A", "EC1A", "W1A"];

pub const US_STATE_CODES: &[&str] = &["CA", "NY", "TX", "FL", "IL"];

pub const CITIES: &[&str] = &[
    "New York", "Los Angeles", "Chicago", "Houston", "Phoenix", "Philadelphia", "San Antonio",
    "San Diego", "Dallas", "San Jose", "Austin", "Jacksonville", "Fort Worth", "Columbus",
    "Charlotte", "San Francisco", "Indianapolis", "Seattle", "Denver", "Boston", "London",
    "Manchester", "Birmingham", "Edinburgh", "Glasgow", "Paris", "Lyon", "Marseille", "Berlin",
    "Munich", "Hamburg", "Tokyo", "Osaka", "Sydney", "Melbourne", "Toronto", "Vancouver",
    "Mumbai", "Delhi", "Bangalore", "Shanghai", "Beijing", "Singapore", "Dubai", "Amsterdam",
    "Barcelona", "Milan", "Rome", "Lisbon", "Vienna", "Prague",
];

pub const COUNTRY_NAMES: &[&str] = &[
    "United States", "Canada", "United Kingdom", "Germany", "France", "Australia", "India",
    "Japan", "Brazil", "Italy", "Spain", "Mexico", "South Korea", "Netherlands", "Sweden",
    "Norway", "Denmark", "Finland", "Switzerland", "Austria", "Belgium", "Portugal", "Poland",
    "Czech Republic", "Hungary", "Greece", "Turkey", "Russia", "China", "Singapore", "UAE",
    "Thailand", "Vietnam", "Philippines", "Indonesia", "Malaysia", "New Zealand", "South Africa",
    "Egypt", "Nigeria", "Kenya", "Argentina", "Chile", "Colombia", "Peru",
];

pub const URL_DOMAINS: &[&str] = &[
    "google", "facebook", "amazon", "apple", "microsoft", "twitter", "linkedin", "github",
    "stackoverflow", "youtube", "netflix", "instagram", "pinterest", "reddit", "tumblr",
    "whatsapp", "telegram", "discord", "slack", "zoom",
];

pub const URL_PATHS: &[&str] = &["about", "products", "services", "blog", "contact"];

pub const TEXT_WORDS: &[&str] = &[
    "the", "quick", "brown", "fox", "jumps", "over", "lazy", "dog", "hello", "world", "test",
    "data", "generator", "sample", "text", "random", "useful", "helpful", "amazing", "awesome",
    "brilliant", "fantastic", "wonderful", "excellent", "perfect", "beautiful", "lovely", "nice",
    "good", "great",
];

pub const SENTENCE_SUBJECTS: &[&str] = &[
    "The quick brown fox",
    "A happy dog",
    "The clever cat",
    "An innovative startup",
    "A dedicated team",
    "The talented developer",
    "An amazing product",
    "A revolutionary idea",
];

pub const SENTENCE_VERBS: &[&str] = &[
    "jumps over", "runs through", "explores", "discovers", "builds", "creates", "transforms",
    "improves",
];

pub const SENTENCE_OBJECTS: &[&str] = &[
    "the lazy bear",
    "the tall building",
    "new horizons",
    "exciting opportunities",
    "powerful solutions",
    "beautiful designs",
    "complex problems",
    "amazing experiences",
];
