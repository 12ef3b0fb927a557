diesel::table! {
    orders (id) {
        id -> Uuid,
        user_id -> Uuid,
        reservation_id -> Nullable<Uuid>,
        event_id -> Nullable<Uuid>,
        voucher_id -> Nullable<Uuid>,
        order_type -> Varchar,
        total_payment -> Numeric,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}
