use sqlx::SqlitePool;
use trivia_api::db::{self, queries};

pub async fn create_test_pool() -> SqlitePool {
    use std::sync::atomic::{AtomicU32, Ordering};
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let id = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("trivia_test_{}_{}.db", std::process::id(), id));
    // Clean up leftover file from previous runs
    let _ = std::fs::remove_file(&path);
    let pool = db::establish_connection(path.to_str().expect("temp path should be utf-8"))
        .await
        .expect("failed to create test database");
    db::run_migrations(&pool)
        .await
        .expect("failed to run migrations");
    pool
}

/// Six categories and 19 questions, the shape the frontend ships with.
/// Category ids are 1..=6 in insertion order: Science, Art, Geography,
/// History, Entertainment, Sports.
pub async fn seed(pool: &SqlitePool) {
    let questions: &[(&str, &str, i64, i64)] = &[
        ("What is the heaviest naturally occurring element?", "Uranium", 1, 3),
        ("Which planet has the most moons?", "Saturn", 1, 2),
        ("What gas do plants absorb from the atmosphere?", "Carbon dioxide", 1, 1),
        ("Who painted the ceiling of the Sistine Chapel?", "Michelangelo", 2, 2),
        ("Which Dutch painter cut off part of his own ear?", "Vincent van Gogh", 2, 1),
        ("What art movement is Salvador Dali associated with?", "Surrealism", 2, 3),
        ("In which museum does the Mona Lisa hang?", "The Louvre", 2, 1),
        ("What is the longest river in Africa?", "The Nile", 3, 2),
        ("Which country has the largest land area?", "Russia", 3, 1),
        ("What is the capital of Australia?", "Canberra", 3, 3),
        ("In what year did the Berlin Wall fall?", "1989", 4, 2),
        ("Who was the first president of the United States?", "George Washington", 4, 1),
        ("Which empire was ruled by Genghis Khan?", "The Mongol Empire", 4, 2),
        ("What ancient wonder stood in Alexandria?", "The Lighthouse", 4, 4),
        ("Who directed the movie Jaws?", "Steven Spielberg", 5, 1),
        ("What is the highest-grossing film of all time?", "Avatar", 5, 2),
        ("Which band recorded the album Abbey Road?", "The Beatles", 5, 1),
        ("Which country won the first soccer World Cup?", "Uruguay", 6, 3),
        ("How many players are on a basketball court per team?", "Five", 6, 1),
    ];

    for name in [
        "Science",
        "Art",
        "Geography",
        "History",
        "Entertainment",
        "Sports",
    ] {
        queries::categories::create_category(pool, name)
            .await
            .expect("failed to seed category");
    }
    for (question, answer, category, difficulty) in questions {
        queries::questions::create_question(pool, question, answer, *category, *difficulty)
            .await
            .expect("failed to seed question");
    }
}
