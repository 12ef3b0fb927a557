diesel::table! {
    order_packages (id) {
        id -> Uuid,
        order_id -> Uuid,
        menu_package_id -> Uuid,
        chef_id -> Nullable<Uuid>,
        quantity -> Int4,
        note -> Nullable<Varchar>,
        status -> Varchar,
        created_at -> Nullable<Timestamptz>,
        updated_at -> Nullable<Timestamptz>,
    }
}
