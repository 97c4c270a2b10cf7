use std::{str::FromStr, sync::Arc};

use dispatch_board_core::{
    domain::{BoardLayout, CardDraft, CardEdit},
    Board, BoardId, BoardSync, Card, Catalog, DashboardConfig, DragSession, InMemoryStore, JobId,
    StoreConfig,
};

const PENDING: BoardId = BoardId::new(1);
const ASSIGNED: BoardId = BoardId::new(2);

fn job_one() -> Card {
    let draft = CardDraft::with_catalog_defaults(&Catalog::default());
    let mut card = Card::from_draft(draft, "Dispatcher");
    card.job_id = JobId::from_str("JOB-1").unwrap();
    card.status = "Pending".to_string();
    card
}

/// Board "Pending" holding JOB-1, the other three boards empty
async fn scenario() -> BoardSync<InMemoryStore> {
    let mut boards = BoardLayout::default().build();
    boards[0].cards.push(job_one());

    let store = Arc::new(InMemoryStore::new(boards, StoreConfig::instant()));
    BoardSync::connect(store, Catalog::default()).await
}

fn board(sync: &BoardSync<InMemoryStore>, id: BoardId) -> &Board {
    sync.board(id).expect("board exists")
}

#[tokio::test]
async fn test_move_pending_job_to_assigned() {
    let mut sync = scenario().await;
    let id = JobId::from_str("JOB-1").unwrap();
    let card = board(&sync, PENDING).find_card(&id).unwrap().clone();

    assert!(sync.move_card(card.clone(), ASSIGNED, "Assigned").await);

    assert!(board(&sync, PENDING).is_empty());
    let moved = board(&sync, ASSIGNED).find_card(&id).unwrap();
    assert_eq!(moved.status, "Assigned");
    assert!(moved.updated_date_time > card.updated_date_time);
    assert!(sync.error().is_none());
}

#[tokio::test]
async fn test_edit_assigns_first_driver() {
    let mut sync = scenario().await;
    let id = JobId::from_str("JOB-1").unwrap();
    let before = board(&sync, PENDING).find_card(&id).unwrap().clone();
    assert_eq!(before.driver_assigned_count, 0);

    let mut edit = CardEdit::from(&before);
    edit.driver_id = "Driver-001".to_string();
    assert!(sync.save_edit(&id, edit).await);

    let after = board(&sync, PENDING).find_card(&id).unwrap();
    assert_eq!(after.driver_id, "Driver-001");
    assert_eq!(after.driver_assigned_count, 1);
    assert_ne!(after.updated_date_time, before.updated_date_time);
}

#[tokio::test]
async fn test_driver_counter_rules_across_edits() {
    let mut sync = scenario().await;
    let id = JobId::from_str("JOB-1").unwrap();

    let steps = [("Driver-002", 1), ("Driver-003", 1), ("", 1), ("Driver-004", 2)];
    for (driver, expected) in steps {
        let current = board(&sync, PENDING).find_card(&id).unwrap().clone();
        let mut edit = CardEdit::from(&current);
        edit.driver_id = driver.to_string();

        assert!(sync.save_edit(&id, edit).await);
        let saved = board(&sync, PENDING).find_card(&id).unwrap();
        assert_eq!(saved.driver_assigned_count, expected, "after setting '{}'", driver);
    }
}

#[tokio::test]
async fn test_drop_on_own_board_leaves_collection_unchanged() {
    let mut sync = scenario().await;
    let before = sync.boards().to_vec();
    let card = board(&sync, PENDING).cards[0].clone();

    let mut session = DragSession::new();
    session.start(card, PENDING);
    assert!(sync.drop_card(&mut session, PENDING).await);

    assert_eq!(sync.boards(), before.as_slice());
}

#[tokio::test]
async fn test_drag_round_trip_through_every_column() {
    let mut sync = scenario().await;
    let id = JobId::from_str("JOB-1").unwrap();
    let mut current_board = PENDING;

    for target in [2, 3, 4, 1] {
        let target = BoardId::new(target);
        let card = board(&sync, current_board).find_card(&id).unwrap().clone();

        let mut session = DragSession::new();
        session.start(card, current_board);
        assert!(sync.drop_card(&mut session, target).await);

        let title = board(&sync, target).title.clone();
        assert_eq!(board(&sync, target).find_card(&id).unwrap().status, title);
        assert!(!board(&sync, current_board).contains(&id));
        current_board = target;
    }
}

#[tokio::test]
async fn test_added_cards_take_board_title() {
    let mut sync = scenario().await;

    for board_id in 1..=4 {
        let board_id = BoardId::new(board_id);
        let draft = CardDraft::with_catalog_defaults(sync.catalog());
        let id = sync.create_job(board_id, draft, "Dispatcher").await.unwrap();

        let (found_on, card) = sync.find_card(&id).unwrap();
        assert_eq!(found_on, board_id);
        assert_eq!(card.status, board(&sync, board_id).title);
    }
}

#[tokio::test]
async fn test_delete_unknown_job_is_silent() {
    let mut sync = scenario().await;
    let before = board(&sync, PENDING).clone();

    assert!(sync.delete_card(PENDING, &JobId::from_parts(42, 42)).await);

    assert!(sync.error().is_none());
    assert_eq!(board(&sync, PENDING), &before);
}

#[tokio::test]
async fn test_stale_move_reinserts_card() {
    let mut sync = scenario().await;
    let card = board(&sync, PENDING).cards[0].clone();

    assert!(sync.delete_card(PENDING, &card.job_id).await);
    assert!(sync.move_card(card.clone(), ASSIGNED, "Assigned").await);

    let assigned = board(&sync, ASSIGNED);
    assert_eq!(assigned.len(), 1);
    assert_eq!(assigned.cards[0].job_id, card.job_id);
}

#[tokio::test]
async fn test_store_failure_surfaces_once_and_keeps_snapshot() {
    let mut boards = BoardLayout::default().build();
    boards[0].cards.push(job_one());
    let store = Arc::new(InMemoryStore::new(boards, StoreConfig::instant()));
    let mut sync = BoardSync::connect(store.clone(), Catalog::default()).await;
    let before = sync.boards().to_vec();

    store.inject_failure("connection reset").await;
    let card = board(&sync, PENDING).cards[0].clone();
    assert!(!sync.move_card(card.clone(), ASSIGNED, "Assigned").await);

    assert_eq!(sync.error(), Some("Failed to move card"));
    assert_eq!(sync.boards(), before.as_slice());

    // Not retried: the next call goes through normally
    assert!(sync.move_card(card, ASSIGNED, "Assigned").await);
    assert!(sync.error().is_none());
    assert_eq!(board(&sync, ASSIGNED).len(), 1);
}

#[tokio::test]
async fn test_default_config_dashboard() {
    let config = DashboardConfig {
        store: StoreConfig::instant(),
        ..DashboardConfig::default()
    };
    let store = Arc::new(InMemoryStore::new(config.build_boards(), config.store.clone()));
    let sync = BoardSync::connect(store, config.catalog.clone()).await;

    let counts: Vec<usize> = sync.boards().iter().map(Board::len).collect();
    assert_eq!(counts, [2, 1, 1, 1]);
    for b in sync.boards() {
        for card in &b.cards {
            assert_eq!(card.status, b.title);
        }
    }
}
