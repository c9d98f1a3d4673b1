/*!
# `GOSUB <label>`

## Purpose
Jump to a label, remembering where to come back to.

## Remarks
The current line is pushed on the return stack before the jump, so a
later [`RETURN`](super::RETURN) resumes on the line after the `GOSUB`.
Subroutines may call further subroutines; returns unwind in reverse
order.

The target is named exactly as for [`GOTO`](super::GOTO): an
identifier label or an integer expression.

## Example
```text
gosub Greet
print "back home"
end
Greet
print "hello from below"
return
```

*/
