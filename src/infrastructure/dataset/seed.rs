//! The reference dataset the portal serves. Transcribed verbatim from the
//! published PM-AJAY demo data; ids are stable and referenced by tests.

use chrono::NaiveDate;

use crate::domain::agency::{Agency, AgencyKind};
use crate::domain::project::{ProgramComponent, Project, ProjectStatus};
use crate::domain::region::{District, State, Village};

fn state(id: &str, name: &str, code: &str) -> State {
    State {
        id: id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
    }
}

fn district(id: &str, state_id: &str, name: &str, code: &str, lat: f64, lng: f64) -> District {
    District {
        id: id.to_string(),
        state_id: state_id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        latitude: lat,
        longitude: lng,
    }
}

fn village(id: &str, district_id: &str, name: &str, code: &str, lat: f64, lng: f64) -> Village {
    Village {
        id: id.to_string(),
        district_id: district_id.to_string(),
        name: name.to_string(),
        code: code.to_string(),
        latitude: Some(lat),
        longitude: Some(lng),
    }
}

fn agency(id: &str, name: &str, kind: AgencyKind) -> Agency {
    Agency {
        id: id.to_string(),
        name: name.to_string(),
        kind,
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid seed date")
}

pub fn states() -> Vec<State> {
    vec![
        state("1", "Andhra Pradesh", "AP"),
        state("2", "Arunachal Pradesh", "AR"),
        state("3", "Assam", "AS"),
        state("4", "Bihar", "BR"),
        state("5", "Chhattisgarh", "CG"),
        state("6", "Goa", "GA"),
        state("7", "Gujarat", "GJ"),
        state("8", "Haryana", "HR"),
        state("9", "Himachal Pradesh", "HP"),
        state("10", "Jharkhand", "JH"),
        state("11", "Karnataka", "KA"),
        state("12", "Kerala", "KL"),
        state("13", "Madhya Pradesh", "MP"),
        state("14", "Maharashtra", "MH"),
        state("15", "Manipur", "MN"),
        state("16", "Meghalaya", "ML"),
        state("17", "Mizoram", "MZ"),
        state("18", "Nagaland", "NL"),
        state("19", "Odisha", "OR"),
        state("20", "Punjab", "PB"),
        state("21", "Rajasthan", "RJ"),
        state("22", "Sikkim", "SK"),
        state("23", "Tamil Nadu", "TN"),
        state("24", "Telangana", "TG"),
        state("25", "Tripura", "TR"),
        state("26", "Uttar Pradesh", "UP"),
        state("27", "Uttarakhand", "UK"),
        state("28", "West Bengal", "WB"),
    ]
}

pub fn districts() -> Vec<District> {
    vec![
        // Andhra Pradesh
        district("d1", "1", "Visakhapatnam", "VSP", 17.6869, 83.2185),
        district("d2", "1", "Vijayawada", "VJA", 16.5062, 80.6480),
        district("d3", "1", "Guntur", "GNT", 16.3067, 80.4365),
        district("d4", "1", "Nellore", "NLR", 14.4426, 79.9865),
        district("d5", "1", "Kurnool", "KNL", 15.8281, 78.0373),
        // Karnataka
        district("d6", "11", "Bangalore Urban", "BLR", 12.9716, 77.5946),
        district("d7", "11", "Mysore", "MYS", 12.2958, 76.6394),
        district("d8", "11", "Mangalore", "MNG", 12.9141, 74.8560),
        district("d9", "11", "Hubli", "HBL", 15.3647, 75.1240),
        district("d10", "11", "Belgaum", "BGM", 15.8497, 74.4977),
        // Kerala
        district("d11", "12", "Thiruvananthapuram", "TVM", 8.5241, 76.9366),
        district("d12", "12", "Ernakulam", "EKM", 9.9816, 76.2999),
        district("d13", "12", "Kozhikode", "KZD", 11.2588, 75.7804),
        district("d14", "12", "Thrissur", "TCR", 10.5276, 76.2144),
        district("d15", "12", "Kollam", "KLM", 8.8932, 76.6141),
        // Tamil Nadu
        district("d16", "23", "Chennai", "CHN", 13.0827, 80.2707),
        district("d17", "23", "Coimbatore", "CBE", 11.0168, 76.9558),
        district("d18", "23", "Madurai", "MDU", 9.9252, 78.1198),
        district("d19", "23", "Tiruchirappalli", "TPJ", 10.7905, 78.7047),
        district("d20", "23", "Salem", "SLM", 11.6643, 78.1460),
        // Maharashtra
        district("d21", "14", "Mumbai", "MUM", 19.0760, 72.8777),
        district("d22", "14", "Pune", "PUN", 18.5204, 73.8567),
        district("d23", "14", "Nagpur", "NGP", 21.1458, 79.0882),
        district("d24", "14", "Nashik", "NSK", 19.9975, 73.7898),
        district("d25", "14", "Aurangabad", "AUR", 19.8762, 75.3433),
        // Rajasthan
        district("d26", "21", "Jaipur", "JPR", 26.9124, 75.7873),
        district("d27", "21", "Jodhpur", "JDP", 26.2389, 73.0243),
        district("d28", "21", "Udaipur", "UDP", 24.5854, 73.7125),
        district("d29", "21", "Kota", "KOT", 25.2138, 75.8648),
        district("d30", "21", "Ajmer", "AJM", 26.4499, 74.6399),
        // Uttar Pradesh
        district("d31", "26", "Lucknow", "LKO", 26.8467, 80.9462),
        district("d32", "26", "Kanpur", "KNP", 26.4499, 80.3319),
        district("d33", "26", "Varanasi", "VNS", 25.3176, 82.9739),
        district("d34", "26", "Agra", "AGR", 27.1767, 78.0081),
        district("d35", "26", "Meerut", "MRT", 28.9845, 77.7064),
        // West Bengal
        district("d36", "28", "Kolkata", "KOL", 22.5726, 88.3639),
        district("d37", "28", "Darjeeling", "DJL", 27.0410, 88.2663),
        district("d38", "28", "Howrah", "HWH", 22.5958, 88.2636),
        district("d39", "28", "Siliguri", "SLG", 26.7271, 88.3953),
        district("d40", "28", "Asansol", "ASN", 23.6739, 86.9524),
        // Bihar
        district("d41", "4", "Patna", "PTN", 25.5941, 85.1376),
        district("d42", "4", "Gaya", "GYA", 24.7955, 85.0002),
        district("d43", "4", "Bhagalpur", "BGP", 25.2425, 86.9842),
        district("d44", "4", "Muzaffarpur", "MFP", 26.1225, 85.3906),
        district("d45", "4", "Darbhanga", "DBG", 26.1542, 85.8918),
        // Gujarat
        district("d46", "7", "Ahmedabad", "AMD", 23.0225, 72.5714),
        district("d47", "7", "Surat", "SRT", 21.1702, 72.8311),
        district("d48", "7", "Vadodara", "VDR", 22.3072, 73.1812),
        district("d49", "7", "Rajkot", "RJK", 22.3039, 70.8022),
        district("d50", "7", "Gandhinagar", "GNG", 23.2156, 72.6369),
        // Punjab
        district("d51", "20", "Amritsar", "ASR", 31.6340, 74.8723),
        district("d52", "20", "Ludhiana", "LDH", 30.9010, 75.8573),
        district("d53", "20", "Jalandhar", "JLN", 31.3260, 75.5762),
        district("d54", "20", "Patiala", "PTA", 30.3398, 76.3869),
        district("d55", "20", "Bathinda", "BTI", 30.2110, 74.9455),
        // Haryana
        district("d56", "8", "Gurugram", "GGN", 28.4595, 77.0266),
        district("d57", "8", "Faridabad", "FBD", 28.4089, 77.3178),
        district("d58", "8", "Panipat", "PNP", 29.3909, 76.9635),
        district("d59", "8", "Ambala", "AMB", 30.3782, 76.7767),
        district("d60", "8", "Hisar", "HSR", 29.1492, 75.7217),
        // Madhya Pradesh
        district("d61", "13", "Bhopal", "BPL", 23.2599, 77.4126),
        district("d62", "13", "Indore", "IDR", 22.7196, 75.8577),
        district("d63", "13", "Gwalior", "GWL", 26.2183, 78.1828),
        district("d64", "13", "Jabalpur", "JBP", 23.1815, 79.9864),
        district("d65", "13", "Ujjain", "UJN", 23.1765, 75.7885),
        // Telangana
        district("d66", "24", "Hyderabad", "HYD", 17.3850, 78.4867),
        district("d67", "24", "Warangal", "WRG", 17.9784, 79.6003),
        district("d68", "24", "Nizamabad", "NZB", 18.6725, 78.0941),
        district("d69", "24", "Karimnagar", "KMN", 18.4386, 79.1288),
        district("d70", "24", "Khammam", "KMM", 17.2473, 80.1514),
        // Odisha
        district("d71", "19", "Bhubaneswar", "BBS", 20.2961, 85.8245),
        district("d72", "19", "Cuttack", "CTC", 20.5124, 85.8830),
        district("d73", "19", "Rourkela", "RRK", 22.2604, 84.8536),
        district("d74", "19", "Puri", "PUR", 19.8135, 85.8312),
        district("d75", "19", "Sambalpur", "SBP", 21.4669, 83.9812),
        // Jharkhand
        district("d76", "10", "Ranchi", "RNC", 23.3441, 85.3096),
        district("d77", "10", "Jamshedpur", "JAM", 22.8046, 86.2029),
        district("d78", "10", "Dhanbad", "DHN", 23.7957, 86.4304),
        district("d79", "10", "Bokaro", "BKO", 23.6693, 86.1511),
        district("d80", "10", "Hazaribagh", "HZB", 23.9929, 85.3615),
        // Chhattisgarh
        district("d81", "5", "Raipur", "RAI", 21.2514, 81.6296),
        district("d82", "5", "Bhilai", "BHI", 21.2091, 81.3797),
        district("d83", "5", "Bilaspur", "BSP", 22.0797, 82.1409),
        district("d84", "5", "Korba", "KOR", 22.3595, 82.7501),
        district("d85", "5", "Durg", "DRG", 21.1938, 81.2849),
        // Assam
        district("d86", "3", "Guwahati", "GAU", 26.1445, 91.7362),
        district("d87", "3", "Dibrugarh", "DIB", 27.4728, 94.9120),
        district("d88", "3", "Jorhat", "JRH", 26.7509, 94.2037),
        district("d89", "3", "Silchar", "SCL", 24.8333, 92.7789),
        district("d90", "3", "Tezpur", "TEZ", 26.6338, 92.8000),
        // Uttarakhand
        district("d91", "27", "Dehradun", "DDN", 30.3165, 78.0322),
        district("d92", "27", "Haridwar", "HRW", 29.9457, 78.1642),
        district("d93", "27", "Nainital", "NTL", 29.3803, 79.4636),
        district("d94", "27", "Roorkee", "RKE", 29.8543, 77.8880),
        district("d95", "27", "Haldwani", "HDW", 29.2183, 79.5130),
        // Himachal Pradesh
        district("d96", "9", "Shimla", "SML", 31.1048, 77.1734),
        district("d97", "9", "Dharamshala", "DRM", 32.2190, 76.3234),
        district("d98", "9", "Kullu", "KLU", 31.9582, 77.1093),
        district("d99", "9", "Manali", "MNL", 32.2432, 77.1892),
        district("d100", "9", "Solan", "SLN", 30.9045, 77.0967),
    ]
}

pub fn villages() -> Vec<Village> {
    vec![
        village("v1", "d6", "Yelahanka", "YLH", 13.1007, 77.5963),
        village("v2", "d6", "Devanahalli", "DVN", 13.2490, 77.7120),
        village("v3", "d7", "Srirangapatna", "SRP", 12.4181, 76.6947),
        village("v4", "d7", "Hunsur", "HNS", 12.3025, 76.2920),
        village("v5", "d11", "Neyyattinkara", "NYT", 8.4004, 77.0890),
        village("v6", "d11", "Varkala", "VRK", 8.7379, 76.7163),
        village("v7", "d12", "Aluva", "ALV", 10.1080, 76.3525),
        village("v8", "d12", "Kalamassery", "KLM", 10.0537, 76.3274),
        village("v9", "d16", "Tambaram", "TBM", 12.9249, 80.1000),
        village("v10", "d16", "Avadi", "AVD", 13.1147, 80.1018),
        village("v11", "d17", "Pollachi", "PLC", 10.6580, 77.0080),
        village("v12", "d17", "Mettupalayam", "MTP", 11.2994, 76.9376),
        village("v13", "d21", "Kurla", "KRL", 19.0688, 72.8794),
        village("v14", "d21", "Andheri", "AND", 19.1136, 72.8697),
        village("v15", "d22", "Pimpri", "PMP", 18.6298, 73.8038),
        village("v16", "d22", "Khadki", "KDK", 18.5645, 73.8393),
        village("v17", "d26", "Amber", "AMB", 26.9855, 75.8513),
        village("v18", "d26", "Sanganer", "SGN", 26.8483, 75.7999),
        village("v19", "d28", "Jaisamand", "JSM", 24.5512, 73.6050),
        village("v20", "d28", "Mavli", "MVL", 24.5682, 73.7343),
        village("v21", "d31", "Malihabad", "MLH", 26.9225, 80.7134),
        village("v22", "d31", "Mohanlalganj", "MLG", 26.7500, 80.8500),
        village("v23", "d33", "Sarnath", "SRT", 25.3816, 83.0224),
        village("v24", "d33", "Ramnagar", "RNR", 25.2698, 82.9893),
        village("v25", "d36", "Barrackpore", "BRP", 22.7642, 88.3776),
        village("v26", "d36", "Barasat", "BRS", 22.7233, 88.4816),
        village("v27", "d41", "Danapur", "DNP", 25.6316, 85.0475),
        village("v28", "d41", "Phulwarisharif", "PWS", 25.5492, 84.9971),
        village("v29", "d46", "Sanand", "SND", 22.9930, 72.3721),
        village("v30", "d46", "Dholka", "DLK", 22.7273, 72.4403),
    ]
}

pub fn agencies() -> Vec<Agency> {
    vec![
        agency("a1", "National SC/ST Hub", AgencyKind::Government),
        agency("a2", "Rural Development Agency", AgencyKind::Government),
        agency("a3", "Skill India Mission", AgencyKind::Government),
        agency("a4", "Infrastructure Development Corporation", AgencyKind::Psu),
        agency("a5", "Sarva Shiksha Abhiyan", AgencyKind::Government),
        agency("a6", "Jan Kalyan Sanstha", AgencyKind::Ngo),
        agency("a7", "Tribal Welfare Board", AgencyKind::Government),
        agency("a8", "Community Development Foundation", AgencyKind::Ngo),
        agency("a9", "State Housing Board", AgencyKind::Government),
        agency("a10", "Youth Empowerment Trust", AgencyKind::Ngo),
    ]
}

pub fn projects() -> Vec<Project> {
    vec![
        Project {
            id: "p1".to_string(),
            component: ProgramComponent::AdarshGramYojana,
            state_id: "11".to_string(),
            district_id: "d6".to_string(),
            village_id: "v1".to_string(),
            agency_id: "a1".to_string(),
            status: ProjectStatus::Completed,
            funds_allocated: 5_000_000,
            funds_utilized: 4_800_000,
            start_date: date(2023, 1, 15),
            end_date: Some(date(2024, 3, 30)),
            description: "Complete village development with infrastructure and sanitation"
                .to_string(),
            beneficiaries: 1200,
        },
        Project {
            id: "p2".to_string(),
            component: ProgramComponent::ScStHostels,
            state_id: "12".to_string(),
            district_id: "d11".to_string(),
            village_id: "v5".to_string(),
            agency_id: "a5".to_string(),
            status: ProjectStatus::Ongoing,
            funds_allocated: 8_000_000,
            funds_utilized: 6_200_000,
            start_date: date(2023, 6, 1),
            end_date: None,
            description: "Construction of 100-bed hostel facility for SC/ST students".to_string(),
            beneficiaries: 100,
        },
        Project {
            id: "p3".to_string(),
            component: ProgramComponent::SkillDevelopment,
            state_id: "23".to_string(),
            district_id: "d16".to_string(),
            village_id: "v9".to_string(),
            agency_id: "a3".to_string(),
            status: ProjectStatus::Completed,
            funds_allocated: 3_500_000,
            funds_utilized: 3_400_000,
            start_date: date(2022, 8, 10),
            end_date: Some(date(2023, 12, 20)),
            description: "IT and vocational training center establishment".to_string(),
            beneficiaries: 450,
        },
        Project {
            id: "p4".to_string(),
            component: ProgramComponent::InfrastructureDevelopment,
            state_id: "14".to_string(),
            district_id: "d21".to_string(),
            village_id: "v13".to_string(),
            agency_id: "a4".to_string(),
            status: ProjectStatus::Ongoing,
            funds_allocated: 12_000_000,
            funds_utilized: 8_500_000,
            start_date: date(2023, 3, 15),
            end_date: None,
            description: "Road connectivity and drainage system upgrade".to_string(),
            beneficiaries: 2500,
        },
        Project {
            id: "p5".to_string(),
            component: ProgramComponent::NgoCommunityProjects,
            state_id: "21".to_string(),
            district_id: "d26".to_string(),
            village_id: "v17".to_string(),
            agency_id: "a6".to_string(),
            status: ProjectStatus::Completed,
            funds_allocated: 2_500_000,
            funds_utilized: 2_450_000,
            start_date: date(2022, 11, 1),
            end_date: Some(date(2024, 1, 15)),
            description: "Women empowerment and livelihood programs".to_string(),
            beneficiaries: 350,
        },
        Project {
            id: "p6".to_string(),
            component: ProgramComponent::AdarshGramYojana,
            state_id: "26".to_string(),
            district_id: "d31".to_string(),
            village_id: "v21".to_string(),
            agency_id: "a2".to_string(),
            status: ProjectStatus::Ongoing,
            funds_allocated: 6_500_000,
            funds_utilized: 4_200_000,
            start_date: date(2023, 9, 1),
            end_date: None,
            description: "Model village development with solar power and water supply".to_string(),
            beneficiaries: 1800,
        },
        Project {
            id: "p7".to_string(),
            component: ProgramComponent::ScStHostels,
            state_id: "28".to_string(),
            district_id: "d36".to_string(),
            village_id: "v25".to_string(),
            agency_id: "a5".to_string(),
            status: ProjectStatus::Delayed,
            funds_allocated: 7_000_000,
            funds_utilized: 3_500_000,
            start_date: date(2023, 2, 20),
            end_date: None,
            description: "Girls hostel with modern amenities".to_string(),
            beneficiaries: 80,
        },
        Project {
            id: "p8".to_string(),
            component: ProgramComponent::SkillDevelopment,
            state_id: "4".to_string(),
            district_id: "d41".to_string(),
            village_id: "v27".to_string(),
            agency_id: "a3".to_string(),
            status: ProjectStatus::Ongoing,
            funds_allocated: 4_000_000,
            funds_utilized: 2_800_000,
            start_date: date(2023, 7, 15),
            end_date: None,
            description: "Textile and handicraft training center".to_string(),
            beneficiaries: 300,
        },
        Project {
            id: "p9".to_string(),
            component: ProgramComponent::InfrastructureDevelopment,
            state_id: "7".to_string(),
            district_id: "d46".to_string(),
            village_id: "v29".to_string(),
            agency_id: "a9".to_string(),
            status: ProjectStatus::Completed,
            funds_allocated: 10_000_000,
            funds_utilized: 9_800_000,
            start_date: date(2022, 4, 1),
            end_date: Some(date(2024, 2, 28)),
            description: "Community center and health clinic construction".to_string(),
            beneficiaries: 3200,
        },
        Project {
            id: "p10".to_string(),
            component: ProgramComponent::NgoCommunityProjects,
            state_id: "20".to_string(),
            district_id: "d51".to_string(),
            village_id: "v25".to_string(),
            agency_id: "a8".to_string(),
            status: ProjectStatus::Ongoing,
            funds_allocated: 3_000_000,
            funds_utilized: 2_100_000,
            start_date: date(2023, 5, 10),
            end_date: None,
            description: "Youth development and sports facilities".to_string(),
            beneficiaries: 500,
        },
    ]
}
