fn main() {
    std::process::exit(pilha::term::main());
}
