/*!
# `GOTO <label>`

## Purpose
Continue execution at a labeled line.

## Remarks
A label is an integer or a bare identifier at the start of a line.
When the target is written as an identifier the jump goes to that named
line. Anything else is evaluated as an expression that must produce an
integer, so computed jumps like `goto 100 + offset` work. Jumping to a
label that no line carries is an error.

When the same label appears on several lines, the last one wins.

## Example
```text
10 print "around "
20 goto 10
```

*/
