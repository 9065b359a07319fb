pub mod bst;
pub mod circular_list;
pub mod doubly_linked_list;
pub mod heap;
pub mod linked_list;
pub mod queue;
pub mod stack;
pub mod union_find;

pub use bst::BinarySearchTree;
pub use circular_list::CircularList;
pub use doubly_linked_list::DoublyLinkedList;
pub use heap::MinHeap;
pub use linked_list::LinkedList;
pub use queue::Queue;
pub use stack::Stack;
pub use union_find::DisjointSet;
