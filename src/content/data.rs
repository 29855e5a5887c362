use super::{
    Faq, FinancingOption, JobOpening, MembershipPlan, Milestone, Review, ServiceOffering,
    Testimonial,
};
use crate::models::MembershipTier;

pub const SERVICES: &[ServiceOffering] = &[
    ServiceOffering {
        slug: "ac-repair",
        name: "AC Repair",
        summary: "Same-day diagnosis and repair for every make of central air and ductless system.",
        starting_price: Some(89),
        features: &["Upfront flat-rate pricing", "Stocked trucks", "90-day repair warranty"],
    },
    ServiceOffering {
        slug: "heating",
        name: "Furnace & Heating",
        summary: "Furnace, boiler and heat pump service to keep buildings warm through winter.",
        starting_price: Some(89),
        features: &["Carbon monoxide testing", "Heat exchanger inspection", "Emergency night calls"],
    },
    ServiceOffering {
        slug: "installation",
        name: "System Installation",
        summary: "Load-calculated replacements and new installs with manufacturer-backed warranties.",
        starting_price: None,
        features: &["Manual J load calculation", "10-year parts warranty", "Financing available"],
    },
    ServiceOffering {
        slug: "maintenance",
        name: "Preventive Maintenance",
        summary: "Seasonal tune-ups that catch failures before they cost a weekend.",
        starting_price: Some(129),
        features: &["21-point inspection", "Coil cleaning", "Written condition report"],
    },
    ServiceOffering {
        slug: "commercial",
        name: "Commercial HVAC",
        summary: "Rooftop units, chillers and building controls for offices, retail and restaurants.",
        starting_price: None,
        features: &["Service agreements", "After-hours scheduling", "Multi-site reporting"],
    },
    ServiceOffering {
        slug: "indoor-air-quality",
        name: "Indoor Air Quality",
        summary: "Filtration, humidity control and UV purification for healthier air.",
        starting_price: Some(149),
        features: &["Air quality testing", "Whole-home humidifiers", "HEPA and UV systems"],
    },
    ServiceOffering {
        slug: "emergency",
        name: "24/7 Emergency Service",
        summary: "A technician on the way day or night when heat or cooling fails.",
        starting_price: Some(149),
        features: &["Live dispatcher", "90-minute target arrival", "No overtime surcharge for members"],
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        author: "Maria G.",
        location: "Oak Park",
        quote: "Our AC died during a heat wave and they had a tech out the same afternoon.",
        rating: 5,
    },
    Testimonial {
        author: "Tom H.",
        location: "Evanston",
        quote: "Clear pricing before any work started. The new furnace is whisper quiet.",
        rating: 5,
    },
    Testimonial {
        author: "Lakeside Dental",
        location: "Chicago",
        quote: "They maintain all four of our rooftop units and we have not had a failure since.",
        rating: 5,
    },
    Testimonial {
        author: "Priya S.",
        location: "Skokie",
        quote: "The membership paid for itself the first year.",
        rating: 4,
    },
];

pub const JOB_OPENINGS: &[JobOpening] = &[
    JobOpening {
        title: "Senior HVAC Service Technician",
        department: "Field Service",
        location: "Chicago, IL",
        employment_type: "Full-time",
        summary: "Diagnose and repair residential and light commercial systems. EPA 608 required.",
    },
    JobOpening {
        title: "Install Lead",
        department: "Installation",
        location: "Chicago, IL",
        employment_type: "Full-time",
        summary: "Run a two-person crew on equipment replacements and new construction.",
    },
    JobOpening {
        title: "Customer Service Dispatcher",
        department: "Operations",
        location: "Chicago, IL",
        employment_type: "Full-time",
        summary: "Schedule calls, route technicians and keep customers informed.",
    },
    JobOpening {
        title: "HVAC Apprentice",
        department: "Field Service",
        location: "Chicago, IL",
        employment_type: "Full-time",
        summary: "Paid training alongside senior technicians with a path to certification.",
    },
];

pub const FAQS: &[Faq] = &[
    Faq {
        category: "Service",
        question: "How quickly can you get a technician out?",
        answer: "Most repair calls are scheduled same or next day. Emergency calls are dispatched around the clock.",
    },
    Faq {
        category: "Service",
        question: "Do you charge for estimates?",
        answer: "Replacement estimates are free. Diagnostic visits carry a flat fee that is credited toward the repair.",
    },
    Faq {
        category: "Pricing",
        question: "Do you offer financing?",
        answer: "Yes. Approved customers can choose same-as-cash or fixed monthly payment plans.",
    },
    Faq {
        category: "Memberships",
        question: "What does a maintenance membership include?",
        answer: "Seasonal tune-ups, priority scheduling and a discount on repairs, depending on the tier.",
    },
    Faq {
        category: "Memberships",
        question: "Can I cancel my membership?",
        answer: "Memberships can be cancelled at any time; unused visits do not carry over.",
    },
    Faq {
        category: "Equipment",
        question: "How long should a furnace last?",
        answer: "A well-maintained furnace typically lasts 15 to 20 years.",
    },
];

pub const COMPANY_TIMELINE: &[Milestone] = &[
    Milestone {
        year: 1998,
        title: "Founded",
        description: "Started as a two-truck repair shop on the north side.",
    },
    Milestone {
        year: 2006,
        title: "Commercial division",
        description: "Began servicing rooftop units for local restaurants and offices.",
    },
    Milestone {
        year: 2014,
        title: "Maintenance memberships",
        description: "Launched the membership program, now the backbone of our service schedule.",
    },
    Milestone {
        year: 2019,
        title: "24/7 dispatch",
        description: "Opened a round-the-clock dispatch center for emergency calls.",
    },
    Milestone {
        year: 2024,
        title: "25 trucks",
        description: "Crossed 25 service vehicles and 10,000 active customers.",
    },
];

pub const FINANCING_OPTIONS: &[FinancingOption] = &[
    FinancingOption {
        name: "12 Months Same-As-Cash",
        apr: "0%",
        term_months: 12,
        minimum_purchase: 1_000,
        description: "No interest when the balance is paid in full within 12 months.",
    },
    FinancingOption {
        name: "Low Monthly Payment",
        apr: "7.99%",
        term_months: 60,
        minimum_purchase: 2_500,
        description: "Fixed payments spread over five years.",
    },
    FinancingOption {
        name: "Extended Term",
        apr: "9.99%",
        term_months: 120,
        minimum_purchase: 7_500,
        description: "Ten-year fixed plan for full system replacements.",
    },
];

pub const MEMBERSHIP_PLANS: &[MembershipPlan] = &[
    MembershipPlan {
        tier: MembershipTier::Bronze,
        name: "Bronze Comfort",
        monthly_price: 14.99,
        visits_per_year: 1,
        repair_discount_percent: 5,
        priority_service: false,
        perks: &["Annual tune-up", "5% off repairs"],
    },
    MembershipPlan {
        tier: MembershipTier::Silver,
        name: "Silver Comfort",
        monthly_price: 24.99,
        visits_per_year: 2,
        repair_discount_percent: 10,
        priority_service: false,
        perks: &["Spring and fall tune-ups", "10% off repairs", "Filter delivery"],
    },
    MembershipPlan {
        tier: MembershipTier::Gold,
        name: "Gold Comfort",
        monthly_price: 34.99,
        visits_per_year: 2,
        repair_discount_percent: 15,
        priority_service: true,
        perks: &["Priority scheduling", "15% off repairs", "No overtime fees"],
    },
    MembershipPlan {
        tier: MembershipTier::Platinum,
        name: "Platinum Comfort",
        monthly_price: 49.99,
        visits_per_year: 4,
        repair_discount_percent: 20,
        priority_service: true,
        perks: &["Quarterly visits", "20% off repairs", "Waived diagnostic fees", "Extended labor warranty"],
    },
];

pub const REVIEWS: &[Review] = &[
    Review {
        author: "Jordan P.",
        platform: "Google",
        rating: 5,
        date: "2025-01-08",
        body: "Fast, friendly and fixed our furnace in under an hour.",
    },
    Review {
        author: "Angela W.",
        platform: "Yelp",
        rating: 5,
        date: "2024-12-19",
        body: "Honest recommendation to repair instead of replace. Earned a customer for life.",
    },
    Review {
        author: "Chris L.",
        platform: "Google",
        rating: 4,
        date: "2024-12-02",
        body: "Good work. Arrival window was a little wide but they called ahead.",
    },
    Review {
        author: "Northside Bistro",
        platform: "Google",
        rating: 5,
        date: "2024-11-14",
        body: "Walk-in cooler and rooftop unit both handled on a Saturday night.",
    },
    Review {
        author: "Dev R.",
        platform: "Facebook",
        rating: 4,
        date: "2024-10-30",
        body: "Install crew left the basement cleaner than they found it.",
    },
];
