use alloc::rc::Rc;
use core::ptr::{self, NonNull};

/// Identity of reference-like payloads.
///
/// Two payloads are the same if they point to the same address; the pointees are
/// never compared, or even read. This is the matching used by [`List::remove_value`]
/// and [`List::peek_value`].
///
/// [`List::remove_value`]: crate::List::remove_value
/// [`List::peek_value`]: crate::List::peek_value
pub trait Identity {
    /// Returns true if `self` and `other` refer to the same address.
    fn is_same(&self, other: &Self) -> bool;
}

impl<U: ?Sized> Identity for &U {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<U: ?Sized> Identity for &mut U {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        ptr::addr_eq(&**self, &**other)
    }
}

impl<U: ?Sized> Identity for *const U {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<U: ?Sized> Identity for *mut U {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        ptr::addr_eq(*self, *other)
    }
}

impl<U: ?Sized> Identity for NonNull<U> {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        ptr::addr_eq(self.as_ptr(), other.as_ptr())
    }
}

impl<U: ?Sized> Identity for Rc<U> {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

#[cfg(target_has_atomic = "ptr")]
impl<U: ?Sized> Identity for alloc::sync::Arc<U> {
    #[inline(always)]
    fn is_same(&self, other: &Self) -> bool {
        alloc::sync::Arc::ptr_eq(self, other)
    }
}
