//! Fixed roster written on first boot (or whenever the student store has to
//! be rebuilt).

use crate::models::Student;

pub const SEED_ROSTER: [&str; 33] = [
    "Adi Prasetyo",
    "Budi Santoso",
    "Citra Dewi",
    "Dian Permata",
    "Eko Susilo",
    "Fina Amalia",
    "Gita Putri",
    "Hadi Wijaya",
    "Indah Sari",
    "Joko Prabowo",
    "Kartika Sari",
    "Lukman Hakim",
    "Mira Lestari",
    "Nanda Putra",
    "Oka Pratama",
    "Putri Cahyani",
    "Rendi Kusuma",
    "Sari Indah",
    "Tono Wijaya",
    "Umi Kalsum",
    "Vina Anggraini",
    "Wawan Setiawan",
    "Xena Putri",
    "Yudi Prasetyo",
    "Zahra Amalia",
    "Ade Saputra",
    "Bunga Sari",
    "Candra Wijaya",
    "Dinda Putri",
    "Elang Sakti",
    "Fitri Amalia",
    "Ghani Pratama",
    "Hana Lestari",
];

/// Sequential ids from 1, empty QR payloads.
pub fn seed_students<S: AsRef<str>>(names: &[S]) -> Vec<Student> {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| Student::new(i as u32 + 1, name.as_ref()))
        .collect()
}
