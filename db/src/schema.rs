table! {
    polls_question (id) {
        id -> Int4,
        question_text -> Varchar,
        pub_date -> Timestamptz,
    }
}
