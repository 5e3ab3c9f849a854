//! Bangladesh address hierarchy used by the checkout form.
//!
//! Division -> district -> upazila. The dataset covers all eight divisions;
//! district lists exist for Dhaka, Chittagong and Rajshahi, and upazila
//! lists for the Dhaka and Chittagong districts. Divisions without data
//! simply offer no child choices.

/// The eight divisions of Bangladesh.
pub const DIVISIONS: &[&str] = &[
    "Dhaka",
    "Chittagong",
    "Rajshahi",
    "Khulna",
    "Barisal",
    "Sylhet",
    "Rangpur",
    "Mymensingh",
];

const DHAKA_DISTRICTS: &[&str] = &[
    "Dhaka",
    "Gazipur",
    "Narayanganj",
    "Tangail",
    "Kishoreganj",
    "Manikganj",
    "Munshiganj",
    "Narsingdi",
    "Rajbari",
    "Shariatpur",
    "Faridpur",
    "Gopalganj",
    "Madaripur",
];

const CHITTAGONG_DISTRICTS: &[&str] = &[
    "Chittagong",
    "Cox's Bazar",
    "Rangamati",
    "Bandarban",
    "Khagrachhari",
    "Feni",
    "Lakshmipur",
    "Comilla",
    "Noakhali",
    "Brahmanbaria",
    "Chandpur",
];

const RAJSHAHI_DISTRICTS: &[&str] = &[
    "Rajshahi",
    "Bogura",
    "Pabna",
    "Sirajganj",
    "Natore",
    "Joypurhat",
    "Chapainawabganj",
    "Naogaon",
];

const DHAKA_UPAZILAS: &[&str] = &[
    "Dhanmondi",
    "Gulshan",
    "Banani",
    "Uttara",
    "Mirpur",
    "Tejgaon",
    "Ramna",
    "Wari",
    "Kotwali",
    "Lalbagh",
    "Hazaribagh",
    "New Market",
    "Shahbagh",
    "Paltan",
    "Motijheel",
];

const CHITTAGONG_UPAZILAS: &[&str] = &[
    "Kotwali",
    "Panchlaish",
    "Double Mooring",
    "Halishahar",
    "Chandgaon",
    "Bakalia",
    "Bayazid",
    "Pahartali",
    "Carbazar",
    "Bandar",
    "Karnaphuli",
    "Boalkhali",
    "Anowara",
    "Chandanaish",
    "Satkania",
    "Lohagara",
    "Banshkhali",
    "Sandwip",
    "Sitakunda",
    "Mirsharai",
    "Fatikchhari",
    "Rangunia",
    "Raozan",
    "Patiya",
    "Hathazari",
];

/// Divisions paired with their district lists (divisions with data only).
pub const DISTRICT_GROUPS: &[(&str, &[&str])] = &[
    ("Dhaka", DHAKA_DISTRICTS),
    ("Chittagong", CHITTAGONG_DISTRICTS),
    ("Rajshahi", RAJSHAHI_DISTRICTS),
];

/// Districts paired with their upazila lists (districts with data only).
pub const UPAZILA_GROUPS: &[(&str, &[&str])] = &[
    ("Dhaka", DHAKA_UPAZILAS),
    ("Chittagong", CHITTAGONG_UPAZILAS),
];

/// True if `name` is one of the eight divisions.
#[must_use]
pub fn is_division(name: &str) -> bool {
    DIVISIONS.contains(&name)
}

/// Districts selectable under a division. Empty for divisions without data.
#[must_use]
pub fn districts(division: &str) -> &'static [&'static str] {
    match division {
        "Dhaka" => DHAKA_DISTRICTS,
        "Chittagong" => CHITTAGONG_DISTRICTS,
        "Rajshahi" => RAJSHAHI_DISTRICTS,
        _ => &[],
    }
}

/// Upazilas selectable under a district. Empty for districts without data.
#[must_use]
pub fn upazilas(district: &str) -> &'static [&'static str] {
    match district {
        "Dhaka" => DHAKA_UPAZILAS,
        "Chittagong" => CHITTAGONG_UPAZILAS,
        _ => &[],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_eight_divisions_present() {
        assert_eq!(DIVISIONS.len(), 8);
        assert!(is_division("Dhaka"));
        assert!(is_division("Mymensingh"));
        assert!(!is_division("Kolkata"));
    }

    #[test]
    fn gazipur_is_a_dhaka_district() {
        assert!(districts("Dhaka").contains(&"Gazipur"));
        assert!(!districts("Chittagong").contains(&"Gazipur"));
    }

    #[test]
    fn divisions_without_data_have_no_districts() {
        assert!(districts("Sylhet").is_empty());
        assert!(upazilas("Gazipur").is_empty());
    }
}
