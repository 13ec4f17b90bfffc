//! Built-in demo roster.

use crate::model::{Record, RecordId};

const DEMO_ROWS: [(&str, &str, &str, &str); 20] = [
    ("1", "John Doe", "john.doe@example.com", "Introduction to React"),
    ("2", "Jane Smith", "jane.smith@example.com", "Advanced Node.js"),
    ("3", "Alice Johnson", "alice.johnson@example.com", "CSS Flexbox"),
    ("4", "Bob Brown", "bob.brown@example.com", "TypeScript Basics"),
    ("5", "Charlie Davis", "charlie.davis@example.com", "Python for Data Science"),
    ("6", "Daisy Evans", "daisy.evans@example.com", "Machine Learning"),
    ("7", "Edward Clark", "edward.clark@example.com", "JavaScript ES6"),
    ("8", "Fiona Martinez", "fiona.martinez@example.com", "React Native Development"),
    ("9", "George Wilson", "george.wilson@example.com", "Django for Beginners"),
    ("10", "Hannah Lewis", "hannah.lewis@example.com", "Cloud Computing"),
    ("11", "Isaac Walker", "isaac.walker@example.com", "Deep Learning"),
    ("12", "Jessica Hall", "jessica.hall@example.com", "Full-Stack Development"),
    ("13", "Kevin Allen", "kevin.allen@example.com", "Software Engineering"),
    ("14", "Laura Young", "laura.young@example.com", "Database Management"),
    ("15", "Michael King", "michael.king@example.com", "API Design"),
    ("16", "Nina Scott", "nina.scott@example.com", "UX/UI Design"),
    ("17", "Oscar Wright", "oscar.wright@example.com", "Blockchain Technology"),
    ("18", "Pamela Green", "pamela.green@example.com", "Computer Networks"),
    ("19", "Quincy Adams", "quincy.adams@example.com", "Web Security"),
    ("20", "Rachel Carter", "rachel.carter@example.com", "Data Visualization"),
];

/// The twenty demo records, in id order.
pub fn demo_records() -> Vec<Record> {
    DEMO_ROWS
        .iter()
        .filter_map(|&(id, name, email, label)| {
            RecordId::new(id)
                .ok()
                .map(|id| Record::new(id, name, email, label))
        })
        .collect()
}
