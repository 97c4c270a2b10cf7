//! Demo jobs the dashboard ships with.

use crate::domain::{
    board::{Board, BoardLayout},
    card::{Card, ChargingTo, InvoiceMode, JobId, JobSource, Priority},
};
use chrono::{DateTime, TimeZone, Utc};

fn at(year: i32, month: u32, day: u32, hour: u32, min: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, min, 0)
        .single()
        .unwrap_or_default()
}

struct Place<'a> {
    entity: &'a str,
    line1: &'a str,
    line2: &'a str,
    area: &'a str,
    suburb: &'a str,
}

fn card(
    job_id: JobId,
    parcel: &str,
    pickup: Place<'_>,
    delivery: Place<'_>,
    contact: &str,
) -> Card {
    let created = at(2024, 1, 9, 9, 30);
    Card {
        job_id,
        parcel_description: parcel.to_string(),
        pickup_entity: pickup.entity.to_string(),
        pickup_address_line1: pickup.line1.to_string(),
        pickup_address_line2: pickup.line2.to_string(),
        pickup_suburban_area: pickup.area.to_string(),
        pickup_suburb: pickup.suburb.to_string(),
        delivery_entity: delivery.entity.to_string(),
        delivery_address_line1: delivery.line1.to_string(),
        delivery_address_line2: delivery.line2.to_string(),
        delivery_suburban_area: delivery.area.to_string(),
        delivery_suburb: delivery.suburb.to_string(),
        contact: contact.to_string(),
        priority: Priority::Green,
        charging_to: ChargingTo::Sender,
        pricing: 1,
        manually_invoice: InvoiceMode::No,
        source: JobSource::Website,
        created_by: String::new(),
        driver_id: String::new(),
        driver_assigned_count: 0,
        status: String::new(),
        created_date_time: created,
        updated_date_time: created,
    }
}

/// Builds the default four boards populated with five sample jobs
pub fn demo_boards() -> Vec<Board> {
    let mut boards = BoardLayout::default().build();
    populate(&mut boards);
    boards
}

/// Appends the sample jobs to the boards whose titles match their columns.
/// Jobs whose column is missing from the layout are skipped.
pub fn populate(boards: &mut [Board]) {
    let laptop = Card {
        priority: Priority::Red,
        charging_to: ChargingTo::Receiver,
        created_by: "John Smith".to_string(),
        ..card(
            JobId::new_unchecked("JOB-1704800001-123"),
            "Electronics Package - Laptop",
            Place {
                entity: "Tech Store Sydney",
                line1: "123 George St",
                line2: "",
                area: "Northern Suburbs",
                suburb: "Yanchep",
            },
            Place {
                entity: "ABC Corp",
                line1: "456 Pitt St",
                line2: "Level 5",
                area: "Eastern Suburbs",
                suburb: "Beechboro",
            },
            "+61 2 9876 5432",
        )
    };

    let legal = Card {
        priority: Priority::Yellow,
        pricing: 2,
        manually_invoice: InvoiceMode::Yes,
        source: JobSource::Phone,
        created_by: "Sarah Johnson".to_string(),
        created_date_time: at(2024, 1, 9, 10, 15),
        updated_date_time: at(2024, 1, 9, 10, 15),
        ..card(
            JobId::new_unchecked("JOB-1704800002-456"),
            "Documents - Legal Papers",
            Place {
                entity: "Law Firm Melbourne",
                line1: "789 Collins St",
                line2: "Suite 10",
                area: "Western Suburbs",
                suburb: "North Beach",
            },
            Place {
                entity: "Court House",
                line1: "321 Lonsdale St",
                line2: "",
                area: "Northern Suburbs",
                suburb: "Alkimos",
            },
            "+61 3 8765 4321",
        )
    };

    let medical = Card {
        priority: Priority::Red,
        charging_to: ChargingTo::Receiver,
        pricing: 3,
        created_by: "John Smith".to_string(),
        driver_id: "Driver-001".to_string(),
        driver_assigned_count: 1,
        created_date_time: at(2024, 1, 9, 8, 0),
        updated_date_time: at(2024, 1, 9, 11, 0),
        ..card(
            JobId::new_unchecked("JOB-1704800003-789"),
            "Medical Supplies",
            Place {
                entity: "MedSupply Co",
                line1: "111 Crown St",
                line2: "",
                area: "Central & South Central Suburbs",
                suburb: "Dianella",
            },
            Place {
                entity: "City Hospital",
                line1: "222 Health Ave",
                line2: "Building B",
                area: "Southern Suburbs and Mandurah Region",
                suburb: "Port Kennedy",
            },
            "+61 2 9111 2222",
        )
    };

    let clothing = Card {
        created_by: "Sarah Johnson".to_string(),
        driver_id: "Driver-002".to_string(),
        driver_assigned_count: 1,
        created_date_time: at(2024, 1, 8, 14, 30),
        updated_date_time: at(2024, 1, 9, 9, 0),
        ..card(
            JobId::new_unchecked("JOB-1704800004-012"),
            "Clothing - Fashion Items",
            Place {
                entity: "Fashion Boutique",
                line1: "555 Oxford St",
                line2: "Shop 2",
                area: "Eastern Suburbs",
                suburb: "Bennett Springs",
            },
            Place {
                entity: "Customer Residence",
                line1: "888 Park Rd",
                line2: "",
                area: "Western Suburbs",
                suburb: "Watermans Bay",
            },
            "+61 4 3333 4444",
        )
    };

    let books = Card {
        charging_to: ChargingTo::Receiver,
        source: JobSource::Phone,
        created_by: "John Smith".to_string(),
        driver_id: "Driver-003".to_string(),
        driver_assigned_count: 1,
        created_date_time: at(2024, 1, 7, 10, 0),
        updated_date_time: at(2024, 1, 8, 15, 30),
        ..card(
            JobId::new_unchecked("JOB-1704800005-345"),
            "Books - Educational Materials",
            Place {
                entity: "University Bookstore",
                line1: "999 Campus Dr",
                line2: "Building 5",
                area: "Southern Suburbs and Mandurah Region",
                suburb: "Baldivis",
            },
            Place {
                entity: "Student Housing",
                line1: "777 College Ave",
                line2: "Room 101",
                area: "Central & South Central Suburbs",
                suburb: "Yokine",
            },
            "+61 4 5555 6666",
        )
    };

    let placements = [
        ("Pending", laptop),
        ("Pending", legal),
        ("Assigned", medical),
        ("In Transit", clothing),
        ("Completed", books),
    ];
    for (title, mut job) in placements {
        if let Some(board) = boards.iter_mut().find(|b| b.title == title) {
            job.status = board.title.clone();
            board.cards.push(job);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    #[test]
    fn test_demo_boards_layout() {
        let boards = demo_boards();

        let counts: Vec<usize> = boards.iter().map(Board::len).collect();
        assert_eq!(counts, [2, 1, 1, 1]);
    }

    #[test]
    fn test_populate_skips_missing_columns() {
        let mut boards = vec![Board::new(crate::domain::BoardId::new(9), "Assigned")];
        populate(&mut boards);

        assert_eq!(boards[0].len(), 1);
        assert_eq!(boards[0].cards[0].status, "Assigned");
    }

    #[test]
    fn test_demo_status_matches_board_title() {
        for board in demo_boards() {
            for card in &board.cards {
                assert_eq!(card.status, board.title);
            }
        }
    }

    #[test]
    fn test_demo_cards_pass_catalog_validation() {
        let catalog = Catalog::default();
        for board in demo_boards() {
            for card in &board.cards {
                catalog.validate_card(card).unwrap();
            }
        }
    }

    #[test]
    fn test_demo_timestamps() {
        let boards = demo_boards();
        let medical = &boards[1].cards[0];

        assert_eq!(medical.job_id.as_str(), "JOB-1704800003-789");
        assert_eq!(medical.created_date_time.to_rfc3339(), "2024-01-09T08:00:00+00:00");
        assert!(medical.updated_date_time > medical.created_date_time);
    }
}
