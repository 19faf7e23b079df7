mod session {
    mod integration;
}
